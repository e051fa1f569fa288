use eframe::egui::{self, Color32};
use crate::config::Theme;

/// Colors for one theme. Everything the window paints comes from here.
struct Palette {
    base: fn() -> egui::Visuals,
    text: Color32,
    panel: Color32,
    window: Color32,
    stripe: Color32,
    widget: Color32,
    widget_hovered: Color32,
    accent: Color32,
    selection: Color32,
}

static DARK: Palette = Palette {
    base: egui::Visuals::dark,
    text: Color32::from_rgb(225, 230, 226),
    panel: Color32::from_rgb(22, 26, 24),
    window: Color32::from_rgb(30, 35, 32),
    stripe: Color32::from_rgb(36, 43, 39),
    widget: Color32::from_rgb(44, 52, 47),
    widget_hovered: Color32::from_rgb(58, 69, 62),
    accent: Color32::from_rgb(102, 187, 106),
    selection: Color32::from_rgb(46, 96, 58),
};

static LIGHT: Palette = Palette {
    base: egui::Visuals::light,
    text: Color32::from_rgb(33, 41, 36),
    panel: Color32::from_rgb(250, 252, 249),
    window: Color32::from_rgb(244, 248, 243),
    stripe: Color32::from_rgb(234, 242, 233),
    widget: Color32::from_rgb(222, 233, 221),
    widget_hovered: Color32::from_rgb(206, 222, 204),
    accent: Color32::from_rgb(46, 125, 50),
    selection: Color32::from_rgb(176, 219, 178),
};

fn palette(theme: &Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

pub fn apply_theme(ctx: &egui::Context, theme: &Theme) {
    let colors = palette(theme);
    let mut style = (*ctx.style()).clone();

    let mut visuals = (colors.base)();
    visuals.override_text_color = Some(colors.text);
    visuals.panel_fill = colors.panel;
    visuals.window_fill = colors.window;
    visuals.faint_bg_color = colors.stripe;
    visuals.widgets.inactive.weak_bg_fill = colors.widget;
    visuals.widgets.inactive.bg_fill = colors.widget;
    visuals.widgets.hovered.weak_bg_fill = colors.widget_hovered;
    visuals.widgets.hovered.bg_fill = colors.widget_hovered;
    visuals.selection.bg_fill = colors.selection;
    visuals.hyperlink_color = colors.accent;
    style.visuals = visuals;

    // Roomier chips and form fields
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

/// Text color of selected goal chips.
pub fn accent(theme: &Theme) -> Color32 {
    palette(theme).accent
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(229, 83, 75)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme_is_applied() {
        let ctx = egui::Context::default();
        apply_theme(&ctx, &Theme::Light);

        let style = ctx.style();
        assert!(!style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, LIGHT.panel);
        assert_eq!(style.visuals.override_text_color, Some(LIGHT.text));
    }

    #[test]
    fn test_dark_theme_is_applied() {
        let ctx = egui::Context::default();
        apply_theme(&ctx, &Theme::Light);
        apply_theme(&ctx, &Theme::Dark);

        let style = ctx.style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.visuals.selection.bg_fill, DARK.selection);
    }

    #[test]
    fn test_accent_follows_theme() {
        assert_eq!(accent(&Theme::Dark), DARK.accent);
        assert_eq!(accent(&Theme::Light), LIGHT.accent);
        assert_ne!(accent(&Theme::Dark), accent(&Theme::Light));
    }
}
