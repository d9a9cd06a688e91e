//! BarRenderer - mounts the bar onto a host surface and mirrors active state

use super::bar::DateBar;
use super::config::DateBarConfig;

/// Everything a surface needs to build the bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarLayout {
    pub id: String,
    pub height_px: u32,
    pub bar_style: Vec<(&'static str, String)>,
    pub button_style: Vec<(&'static str, String)>,
    pub labels: Vec<String>,
}

/// Host capabilities used to show the bar
pub trait BarSurface {
    /// Whether an element with `id` already exists
    fn has_element(&self, id: &str) -> bool;

    fn inject_style(&mut self, css: &str) -> Result<(), String>;

    /// Build the fixed bar with one control per label and reserve
    /// `layout.height_px` at the top of the page
    fn mount_bar(&mut self, layout: &BarLayout) -> Result<(), String>;

    fn set_control_active(&mut self, index: usize, active: bool) -> Result<(), String>;
}

pub struct BarRenderer<'a> {
    config: &'a DateBarConfig,
}

impl<'a> BarRenderer<'a> {
    pub fn new(config: &'a DateBarConfig) -> Self {
        Self { config }
    }

    pub fn active_css(&self) -> String {
        format!(
            ".{} {{ background: #4285f4 !important; color: #fff !important; border-color: #4285f4 !important; }}",
            self.config.active_class
        )
    }

    pub fn layout(&self, bar: &DateBar) -> BarLayout {
        let height = format!("{}px", self.config.height_px);
        BarLayout {
            id: self.config.bar_id.clone(),
            height_px: self.config.height_px,
            bar_style: vec![
                ("position", "fixed".into()),
                ("top", "0".into()),
                ("left", "0".into()),
                ("width", "100%".into()),
                ("height", height),
                ("background", "#fff".into()),
                ("z-index", "9999".into()),
                ("display", "flex".into()),
                ("align-items", "center".into()),
                ("box-shadow", "0 2px 4px rgba(0,0,0,0.05)".into()),
                ("padding-left", "24px".into()),
                ("gap", "8px".into()),
            ],
            button_style: vec![
                ("padding", "8px 14px".into()),
                ("font-size", "14px".into()),
                ("cursor", "pointer".into()),
                ("border", "1px solid #ddd".into()),
                ("border-radius", "4px".into()),
                ("background", "#f8f9fa".into()),
            ],
            labels: bar.controls().iter().map(|c| c.rule.label.clone()).collect(),
        }
    }

    /// Mount the bar unless one is already present. Returns whether it was mounted.
    pub fn render<S: BarSurface>(&self, surface: &mut S, bar: &DateBar) -> Result<bool, String> {
        if surface.has_element(&self.config.bar_id) {
            return Ok(false);
        }
        surface.inject_style(&self.active_css())?;
        surface.mount_bar(&self.layout(bar))?;
        Ok(true)
    }

    /// Push every control's active flag to the surface
    pub fn sync<S: BarSurface>(&self, surface: &mut S, bar: &DateBar) -> Result<(), String> {
        for (index, control) in bar.controls().iter().enumerate() {
            surface.set_control_active(index, control.active)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datebar::rules::default_rules;

    #[derive(Default)]
    struct RecordingSurface {
        ids: Vec<String>,
        styles: Vec<String>,
        layouts: Vec<BarLayout>,
        active: Vec<bool>,
    }

    impl BarSurface for RecordingSurface {
        fn has_element(&self, id: &str) -> bool {
            self.ids.iter().any(|i| i == id)
        }

        fn inject_style(&mut self, css: &str) -> Result<(), String> {
            self.styles.push(css.to_string());
            Ok(())
        }

        fn mount_bar(&mut self, layout: &BarLayout) -> Result<(), String> {
            self.ids.push(layout.id.clone());
            self.active = vec![false; layout.labels.len()];
            self.layouts.push(layout.clone());
            Ok(())
        }

        fn set_control_active(&mut self, index: usize, active: bool) -> Result<(), String> {
            let slot = self
                .active
                .get_mut(index)
                .ok_or_else(|| format!("no control {}", index))?;
            *slot = active;
            Ok(())
        }
    }

    #[test]
    fn test_render_once() {
        let config = DateBarConfig::default();
        let bar = DateBar::new(default_rules());
        let renderer = BarRenderer::new(&config);
        let mut surface = RecordingSurface::default();

        assert!(renderer.render(&mut surface, &bar).unwrap());
        assert!(!renderer.render(&mut surface, &bar).unwrap());

        assert_eq!(surface.layouts.len(), 1);
        assert_eq!(surface.styles.len(), 1);
        assert!(surface.styles[0].starts_with(".active-date-btn {"));
        assert_eq!(surface.layouts[0].labels.len(), 8);
        assert_eq!(surface.layouts[0].labels[0], "Past 1 day");
        assert!(surface.layouts[0]
            .bar_style
            .contains(&("height", "48px".to_string())));
    }

    #[test]
    fn test_sync_mirrors_single_active() {
        let config = DateBarConfig::default();
        let mut bar = DateBar::new(default_rules());
        let renderer = BarRenderer::new(&config);
        let mut surface = RecordingSurface::default();
        renderer.render(&mut surface, &bar).unwrap();

        bar.set_active(3);
        renderer.sync(&mut surface, &bar).unwrap();
        bar.set_active(6);
        renderer.sync(&mut surface, &bar).unwrap();

        let lit: Vec<usize> = surface
            .active
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(lit, vec![6]);
    }
}
