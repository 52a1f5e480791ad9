//! Dark and light palettes for the page.

use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub header: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub inset: Color32,
    pub chip: Color32,
    pub text: Color32,
    pub body: Color32,
    pub muted: Color32,
    pub track: Color32,
    pub accent: Color32,
    pub accent_strong: Color32,
    pub accent_alt: Color32,
}

const TEAL_400: Color32 = Color32::from_rgb(45, 212, 191);
const TEAL_500: Color32 = Color32::from_rgb(20, 184, 166);
const CYAN_500: Color32 = Color32::from_rgb(6, 182, 212);

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(2, 6, 23),
            header: Color32::from_rgb(9, 14, 31),
            card: Color32::from_rgb(22, 30, 46),
            card_border: Color32::from_rgb(51, 65, 85),
            inset: Color32::from_rgb(40, 51, 70),
            chip: Color32::from_rgb(30, 38, 54),
            text: Color32::from_rgb(241, 245, 249),
            body: Color32::from_rgb(203, 213, 225),
            muted: Color32::from_rgb(148, 163, 184),
            track: Color32::from_rgb(51, 65, 85),
            accent: TEAL_400,
            accent_strong: TEAL_500,
            accent_alt: CYAN_500,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(248, 250, 252),
            header: Color32::from_rgb(241, 245, 249),
            card: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(226, 232, 240),
            inset: Color32::from_rgb(248, 250, 252),
            chip: Color32::from_rgb(226, 232, 240),
            text: Color32::from_rgb(15, 23, 42),
            body: Color32::from_rgb(51, 65, 85),
            muted: Color32::from_rgb(71, 85, 105),
            track: Color32::from_rgb(226, 232, 240),
            accent: TEAL_500,
            accent_strong: TEAL_500,
            accent_alt: CYAN_500,
        }
    }

    pub fn for_dark(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

pub fn visuals_for(dark: bool) -> egui::Visuals {
    let palette = Palette::for_dark(dark);
    let mut visuals = if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.override_text_color = Some(palette.text);
    visuals.window_fill = palette.background;
    visuals.panel_fill = palette.background;
    visuals.extreme_bg_color = palette.card;
    visuals.faint_bg_color = palette.chip;
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent_strong;
    visuals.widgets.active.bg_fill = palette.accent_strong;
    visuals.widgets.hovered.bg_fill = palette.accent_strong.gamma_multiply(0.85);

    let radius = egui::CornerRadius::same(8);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    visuals
}
