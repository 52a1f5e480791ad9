//! Page sections. Each renderer is stateless: clicks are pushed as
//! [`PageAction`]s and applied by the app after the frame is laid out.

use std::time::Duration;

use egui::{Align, Layout, RichText, Stroke};
use page_core::animation::bar_fraction;
use shared::content::{Contact, ContactAction, ResumeContent, WHATSAPP_URL};
use shared::domain::SkillEntry;

use crate::controller::events::PageAction;
use crate::ui::theme::Palette;

const CARD_RADIUS: u8 = 14;
const BAR_HEIGHT: f32 = 10.0;

pub fn card<R>(
    ui: &mut egui::Ui,
    palette: &Palette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::new()
        .fill(palette.card)
        .stroke(Stroke::new(1.0, palette.card_border))
        .corner_radius(CARD_RADIUS)
        .inner_margin(egui::Margin::same(18))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
}

fn card_title(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).size(20.0).strong());
    ui.add_space(10.0);
}

fn bullet(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.horizontal_top(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 16.0), egui::Sense::hover());
        ui.painter()
            .circle_filled(rect.left_center(), 3.0, palette.accent);
        ui.add(egui::Label::new(RichText::new(text).color(palette.body)).wrap());
    });
}

fn chip(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    egui::Frame::new()
        .fill(palette.chip)
        .stroke(Stroke::new(1.0, palette.card_border))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).color(palette.body));
        });
}

fn link(ui: &mut egui::Ui, palette: &Palette, text: &str) -> egui::Response {
    let response = ui.add(
        egui::Label::new(RichText::new(text).color(palette.accent)).sense(egui::Sense::click()),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

pub fn header(
    ui: &mut egui::Ui,
    palette: &Palette,
    content: &ResumeContent,
    actions: &mut Vec<PageAction>,
) {
    ui.horizontal(|ui| {
        let (brand, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
        ui.painter().rect_filled(brand, 10, palette.accent_alt);
        ui.painter()
            .rect_filled(brand.shrink(6.0), 6, palette.accent);

        ui.vertical(|ui| {
            ui.label(RichText::new(content.profile.name).size(20.0).strong());
            ui.label(
                RichText::new(content.profile.headline)
                    .size(13.0)
                    .color(palette.muted),
            );
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("💬 WhatsApp").clicked() {
                actions.push(PageAction::Open {
                    url: WHATSAPP_URL,
                    new_tab: true,
                });
            }
            let pdf = egui::Button::new(RichText::new("⬇️ PDF").color(egui::Color32::WHITE))
                .fill(palette.accent_strong);
            if ui.add(pdf).on_hover_text("Exportar la página").clicked() {
                actions.push(PageAction::Print);
            }
            if ui.button("🌗 Tema").clicked() {
                actions.push(PageAction::ToggleTheme);
            }
        });
    });
}

pub fn hero(
    ui: &mut egui::Ui,
    palette: &Palette,
    content: &ResumeContent,
    actions: &mut Vec<PageAction>,
) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("Hola, soy").size(30.0).strong());
        ui.label(
            RichText::new(content.profile.name)
                .size(30.0)
                .strong()
                .color(palette.accent),
        );
        ui.label(
            RichText::new(format!("— {}", content.profile.pitch))
                .size(30.0)
                .strong(),
        );
    });
    ui.add_space(12.0);

    ui.add(
        egui::Label::new(
            RichText::new(content.profile.focus)
                .size(16.0)
                .color(palette.body),
        )
        .wrap(),
    );
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("En mi tiempo libre creo").size(16.0).color(palette.body));
        if link(ui, palette, "plantillas de Google Sheets en Etsy").clicked() {
            actions.push(PageAction::Open {
                url: shared::content::ETSY_URL,
                new_tab: true,
            });
        }
        ui.label(
            RichText::new("(automatizaciones y dashboards).")
                .size(16.0)
                .color(palette.body),
        );
    });
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        for tag in content.tags {
            chip(ui, palette, tag);
        }
    });
    ui.add_space(16.0);

    ui.columns(content.stats.len().max(1), |cols| {
        for (col, stat) in cols.iter_mut().zip(content.stats) {
            card(col, palette, |ui| {
                ui.label(RichText::new(stat.value).size(20.0).strong());
                ui.label(RichText::new(stat.label).size(13.0).color(palette.muted));
            });
        }
    });
}

fn contact_row(
    ui: &mut egui::Ui,
    palette: &Palette,
    contact: &Contact,
    actions: &mut Vec<PageAction>,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(contact.icon).size(16.0));
        if link(ui, palette, contact.text).clicked() {
            actions.push(match contact.action {
                ContactAction::Link(url) => PageAction::Open {
                    url,
                    new_tab: contact.opens_new_tab(),
                },
                ContactAction::CopyPageLink => PageAction::CopyLink,
            });
        }
    });
}

pub fn contact(
    ui: &mut egui::Ui,
    palette: &Palette,
    content: &ResumeContent,
    actions: &mut Vec<PageAction>,
) {
    card(ui, palette, |ui| {
        ui.label(RichText::new("Contacto").size(18.0).strong());
        ui.label(
            RichText::new(content.profile.location)
                .size(13.0)
                .color(palette.muted),
        );
        ui.add_space(10.0);
        for contact in content.contacts {
            contact_row(ui, palette, contact, actions);
        }
    });
}

pub fn experience(ui: &mut egui::Ui, palette: &Palette, content: &ResumeContent) {
    card(ui, palette, |ui| {
        card_title(ui, "Experiencia");
        for job in content.experience {
            ui.horizontal_top(|ui| {
                let (marker, _) =
                    ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(marker.center(), 9.0, palette.accent);
                ui.vertical(|ui| {
                    ui.label(RichText::new(job.title).strong());
                    ui.label(RichText::new(job.period).size(13.0).color(palette.muted));
                    ui.add_space(6.0);
                    for achievement in job.achievements {
                        bullet(ui, palette, achievement);
                    }
                });
            });
            ui.add_space(16.0);
        }
    });
}

fn skill_bar(ui: &mut egui::Ui, palette: &Palette, skill: &SkillEntry, fraction: f32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(&skill.name).size(14.0));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(skill.level_label()).size(14.0).strong());
        });
    });

    let (track, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), BAR_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(track, 5, palette.track);
    if fraction > 0.0 {
        let mut fill = track;
        fill.set_width(track.width() * fraction.clamp(0.0, 1.0));
        painter.rect_filled(fill, 5, palette.accent);
    }
    ui.add_space(12.0);
}

/// Renders the observed skills region and returns its screen rect.
pub fn skills(
    ui: &mut egui::Ui,
    palette: &Palette,
    content: &ResumeContent,
    since_reveal: Option<Duration>,
) -> egui::Rect {
    card(ui, palette, |ui| {
        card_title(ui, "Habilidades");
        for (index, skill) in content.skills.iter().enumerate() {
            skill_bar(
                ui,
                palette,
                skill,
                bar_fraction(skill.level, index, since_reveal),
            );
        }
    })
    .response
    .rect
}

pub fn achievements(ui: &mut egui::Ui, palette: &Palette, content: &ResumeContent) {
    card(ui, palette, |ui| {
        card_title(ui, "Logros Destacados");
        for achievement in content.achievements {
            bullet(ui, palette, achievement);
        }
        ui.add_space(8.0);
        ui.label(
            RichText::new(content.achievements_note)
                .size(12.0)
                .italics()
                .color(palette.muted),
        );
    });
}

pub fn projects(ui: &mut egui::Ui, palette: &Palette, content: &ResumeContent) {
    card(ui, palette, |ui| {
        card_title(ui, "Proyectos");
        for pair in content.projects.chunks(2) {
            ui.columns(2, |cols| {
                for (col, project) in cols.iter_mut().zip(pair) {
                    egui::Frame::new()
                        .fill(palette.inset)
                        .stroke(Stroke::new(1.0, palette.card_border))
                        .corner_radius(10)
                        .inner_margin(egui::Margin::same(14))
                        .show(col, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(project.title).strong());
                            ui.add(
                                egui::Label::new(
                                    RichText::new(project.description)
                                        .size(13.0)
                                        .color(palette.body),
                                )
                                .wrap(),
                            );
                            ui.horizontal_wrapped(|ui| {
                                for tag in project.tags {
                                    chip(ui, palette, tag);
                                }
                            });
                        });
                }
            });
            ui.add_space(10.0);
        }
    });
}

pub fn education(ui: &mut egui::Ui, palette: &Palette, content: &ResumeContent) {
    card(ui, palette, |ui| {
        card_title(ui, "Formación");
        for item in content.education {
            bullet(ui, palette, item);
        }
        ui.add_space(12.0);
        ui.label(RichText::new("Idiomas").strong());
        for item in content.languages {
            bullet(ui, palette, item);
        }
    });
}

pub fn about(ui: &mut egui::Ui, palette: &Palette, content: &ResumeContent) {
    card(ui, palette, |ui| {
        card_title(ui, "Sobre mí");
        ui.add(egui::Label::new(RichText::new(content.about).color(palette.body)).wrap());
        ui.add_space(10.0);
        ui.label(RichText::new("Lo que busco").strong());
        ui.add(egui::Label::new(RichText::new(content.seeking).color(palette.body)).wrap());
    });
}

pub fn availability(ui: &mut egui::Ui, palette: &Palette, content: &ResumeContent) {
    card(ui, palette, |ui| {
        card_title(ui, "Disponibilidad");
        for item in content.availability {
            bullet(ui, palette, item);
        }
    });
}

pub fn footer(ui: &mut egui::Ui, palette: &Palette, content: &ResumeContent, year: i32) {
    ui.add_space(24.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(content.footer(year))
                .size(13.0)
                .color(palette.muted),
        );
    });
    ui.add_space(72.0);
}

pub fn whatsapp_button(ctx: &egui::Context, palette: &Palette, actions: &mut Vec<PageAction>) {
    egui::Area::new(egui::Id::new("whatsapp_float"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new("💬").size(24.0))
                .fill(palette.accent_strong)
                .corner_radius(28)
                .min_size(egui::vec2(56.0, 56.0));
            if ui
                .add(button)
                .on_hover_text("Contactar por WhatsApp")
                .clicked()
            {
                actions.push(PageAction::Open {
                    url: WHATSAPP_URL,
                    new_tab: true,
                });
            }
        });
}
