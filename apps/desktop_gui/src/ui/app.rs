use std::{path::PathBuf, sync::Arc};

use chrono::Datelike;
use crossbeam_channel::{Receiver, Sender};
use egui::RichText;
use page_core::animation::transition_settled;
use page_core::{visible_fraction, Bounds, PageController};
use shared::content::ResumeContent;
use shared::domain::{Notice, NoticeSeverity};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{PageAction, UiEvent};
use crate::controller::orchestration::{dispatch_backend_command, export_command};
use crate::ui::sections;
use crate::ui::theme::Palette;

const WIDE_LAYOUT_MIN_WIDTH: f32 = 980.0;
const CONTENT_MAX_WIDTH: f32 = 1180.0;
const EXPORT_FILE_NAME: &str = "cv.png";

pub struct PortfolioApp {
    page: PageController,
    content: ResumeContent,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    notice: Option<Notice>,
    awaiting_snapshot: bool,
}

impl PortfolioApp {
    pub fn new(
        mut page: PageController,
        content: ResumeContent,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        page.mount(&content);
        Self {
            page,
            content,
            cmd_tx,
            ui_rx,
            notice: None,
            awaiting_snapshot: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ClipboardFinished { request, outcome } => {
                    self.notice = Some(request.notice(outcome));
                }
                UiEvent::ExportSaved(path) => {
                    self.notice = Some(Notice::info(format!(
                        "Página exportada: {}",
                        path.display()
                    )));
                }
                UiEvent::ExportFailed(message) => {
                    self.notice = Some(Notice::error(message));
                }
            }
        }
    }

    fn take_snapshot(&mut self, ctx: &egui::Context) {
        if !self.awaiting_snapshot {
            return;
        }
        let image = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(Arc::clone(image)),
                _ => None,
            })
        });
        let Some(image) = image else {
            return;
        };
        self.awaiting_snapshot = false;
        if let Some(cmd) = export_command(image, pick_export_path) {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.notice);
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context, actions: Vec<PageAction>) {
        for action in actions {
            match action {
                PageAction::ToggleTheme => {
                    self.page.toggle_theme();
                }
                PageAction::Print => {
                    self.awaiting_snapshot = true;
                    self.page.print();
                }
                PageAction::CopyLink => dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::CopyToClipboard(self.page.copy_link_request()),
                    &mut self.notice,
                ),
                PageAction::Open { url, new_tab } => {
                    tracing::debug!(url, new_tab, "opening link");
                    ctx.open_url(egui::OpenUrl {
                        url: url.to_string(),
                        new_tab,
                    });
                }
                PageAction::DismissNotice => self.notice = None,
            }
        }
    }

    fn show_header(&self, ctx: &egui::Context, palette: &Palette, actions: &mut Vec<PageAction>) {
        egui::TopBottomPanel::top("page_header")
            .frame(
                egui::Frame::new()
                    .fill(palette.header)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| sections::header(ui, palette, &self.content, actions));
    }

    fn show_notice(&self, ctx: &egui::Context, palette: &Palette, actions: &mut Vec<PageAction>) {
        let Some(notice) = &self.notice else {
            return;
        };
        let fill = match notice.severity {
            NoticeSeverity::Info => palette.accent_strong,
            NoticeSeverity::Error => egui::Color32::from_rgb(185, 28, 28),
        };
        egui::TopBottomPanel::top("page_notice")
            .frame(
                egui::Frame::new()
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(24, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&notice.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            actions.push(PageAction::DismissNotice);
                        }
                    });
                });
            });
    }

    fn show_page(&mut self, ctx: &egui::Context, palette: &Palette, actions: &mut Vec<PageAction>) {
        let since_reveal = self.page.since_reveal();
        let year = chrono::Local::now().year();

        let skills_visibility = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let viewport = ui.clip_rect();
                        let width = ui.available_width().min(CONTENT_MAX_WIDTH);
                        let side = ((ui.available_width() - width) / 2.0).max(0.0) + 16.0;

                        let mut skills_rect = egui::Rect::NOTHING;
                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width - 32.0);
                                ui.add_space(24.0);
                                skills_rect = self.layout_sections(
                                    ui,
                                    palette,
                                    since_reveal,
                                    year,
                                    actions,
                                );
                            });
                        });

                        visible_fraction(to_bounds(skills_rect), to_bounds(viewport))
                    })
                    .inner
            })
            .inner;

        let region = self.page.skills_region().clone();
        self.page.report_visibility(&region, skills_visibility);
    }

    /// Lays out every section and returns the skills card rect.
    fn layout_sections(
        &self,
        ui: &mut egui::Ui,
        palette: &Palette,
        since_reveal: Option<std::time::Duration>,
        year: i32,
        actions: &mut Vec<PageAction>,
    ) -> egui::Rect {
        let content = &self.content;
        let wide = ui.available_width() >= WIDE_LAYOUT_MIN_WIDTH;
        let mut skills_rect = egui::Rect::NOTHING;

        if wide {
            ui.columns(2, |cols| {
                sections::hero(&mut cols[0], palette, content, actions);
                sections::contact(&mut cols[1], palette, content, actions);
            });
            ui.add_space(20.0);
            ui.columns(2, |cols| {
                sections::experience(&mut cols[0], palette, content);
                skills_rect = sections::skills(&mut cols[1], palette, content, since_reveal);
            });
            ui.add_space(20.0);
            ui.columns(2, |cols| {
                sections::projects(&mut cols[0], palette, content);
                sections::achievements(&mut cols[1], palette, content);
            });
            ui.add_space(20.0);
            ui.columns(3, |cols| {
                sections::education(&mut cols[0], palette, content);
                sections::about(&mut cols[1], palette, content);
                sections::availability(&mut cols[2], palette, content);
            });
        } else {
            sections::hero(ui, palette, content, actions);
            ui.add_space(16.0);
            sections::contact(ui, palette, content, actions);
            ui.add_space(16.0);
            sections::experience(ui, palette, content);
            ui.add_space(16.0);
            skills_rect = sections::skills(ui, palette, content, since_reveal);
            ui.add_space(16.0);
            sections::achievements(ui, palette, content);
            ui.add_space(16.0);
            sections::projects(ui, palette, content);
            ui.add_space(16.0);
            sections::education(ui, palette, content);
            ui.add_space(16.0);
            sections::about(ui, palette, content);
            ui.add_space(16.0);
            sections::availability(ui, palette, content);
        }

        sections::footer(ui, palette, content, year);
        skills_rect
    }
}

fn pick_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("PNG", &["png"])
        .save_file()
}

fn to_bounds(rect: egui::Rect) -> Bounds {
    if !rect.is_positive() {
        return Bounds::new(0.0, 0.0, 0.0, 0.0);
    }
    Bounds::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.take_snapshot(ctx);

        let palette = Palette::for_dark(ctx.style().visuals.dark_mode);
        let mut actions = Vec::new();

        self.show_header(ctx, &palette, &mut actions);
        self.show_notice(ctx, &palette, &mut actions);
        self.show_page(ctx, &palette, &mut actions);
        sections::whatsapp_button(ctx, &palette, &mut actions);

        self.apply_actions(ctx, actions);

        let since_reveal = self.page.since_reveal();
        if since_reveal.is_some() && !transition_settled(self.content.skills.len(), since_reveal) {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.page.unmount();
    }
}
