//! Sidebar Section Tracking
//!
//! Works out which page section the scroll position is in.

use wasm_bindgen::JsCast;

/// Sections start counting as active this many pixels before their top edge
pub const ACTIVATION_OFFSET: f64 = 200.0;

/// A page section linked from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SECTIONS: [Section; 4] = [
    Section { id: "dashboard", label: "Dashboard", icon: "fas fa-chart-pie" },
    Section { id: "home", label: "Inventory", icon: "fas fa-home" },
    Section { id: "donate-section", label: "Donate", icon: "fas fa-hand-holding-heart" },
    Section { id: "about-us-page", label: "About Us", icon: "fas fa-info-circle" },
];

/// Measured vertical extent of a rendered section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, scroll_y: f64) -> bool {
        let top = self.offset_top - ACTIVATION_OFFSET;
        scroll_y >= top && scroll_y < top + self.height
    }
}

/// Last section containing `scroll_y`, if any
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    sections
        .iter()
        .filter(|bounds| bounds.contains(scroll_y))
        .last()
        .map(|bounds| bounds.id)
}

/// Bounds of the sections currently in the document; missing ones are skipped
pub fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    SECTIONS
        .iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: section.id,
                offset_top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

/// Section under the current window scroll position
pub fn current_section() -> Option<&'static str> {
    let scroll_y = web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0);
    active_section(scroll_y, &measure_sections())
}

pub fn link_href(id: &str) -> String {
    format!("#{}", id)
}
