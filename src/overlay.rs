use crate::labels::LabelPlacement;
use crate::session::Session;
use wasm_bindgen::JsCast;
use web_sys as web;

const LABEL_BASE_STYLE: &str = "position:absolute;left:50%;top:50%;\
    transform:translate(-50%,-120%);white-space:nowrap;pointer-events:none;\
    transition:opacity 0.3s;font:600 14px system-ui;color:#37474f;\
    text-shadow:0 1px 2px rgba(255,255,255,0.8)";

/// Floating text labels tracking the markers' screen projections.
///
/// One absolutely positioned div per visible marker lives in `#label-layer`.
/// The node list is rebuilt when the visible set changes; per frame only
/// transform and opacity are touched, so off-screen labels fade instead of
/// popping.
pub struct LabelLayer {
    container: web::Element,
    nodes: Vec<web::HtmlElement>,
    texts: Vec<&'static str>,
}

impl LabelLayer {
    pub fn new(document: &web::Document) -> Option<Self> {
        let container = document.get_element_by_id("label-layer")?;
        Some(Self {
            container,
            nodes: Vec::new(),
            texts: Vec::new(),
        })
    }

    fn rebuild_nodes(&mut self, document: &web::Document, labels: &[LabelPlacement]) {
        self.container.set_inner_html("");
        self.nodes.clear();
        self.texts.clear();
        for label in labels {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            let _ = el.set_attribute("style", LABEL_BASE_STYLE);
            el.set_text_content(Some(label.text));
            let _ = self.container.append_child(&el);
            if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
                self.nodes.push(html);
                self.texts.push(label.text);
            }
        }
    }

    pub fn update(&mut self, document: &web::Document, labels: &[LabelPlacement]) {
        let same_set = self.texts.len() == labels.len()
            && self.texts.iter().zip(labels).all(|(t, l)| *t == l.text);
        if !same_set {
            self.rebuild_nodes(document, labels);
        }
        for (node, label) in self.nodes.iter().zip(labels) {
            let style = node.style();
            let _ = style.set_property(
                "transform",
                &format!(
                    "translate(-50%,-120%) translate({:.1}px,{:.1}px)",
                    label.x, label.y
                ),
            );
            let _ = style.set_property("opacity", if label.visible { "1" } else { "0" });
        }
    }

    /// Drop all label nodes; part of teardown and safe to call twice.
    pub fn clear(&mut self) {
        self.container.set_inner_html("");
        self.nodes.clear();
        self.texts.clear();
    }
}

fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Refresh the status panel after a navigation change.
pub fn update_hud(document: &web::Document, session: &Session) {
    set_text(document, "hud-zoom", session.zoom_level().label());
    set_text(document, "hud-count", &session.visible_count().to_string());
    set_text(document, "hud-path", &session.breadcrumb_text());
    if let Some(el) = document.get_element_by_id("hud-back") {
        if session.can_zoom_out() {
            let _ = el.remove_attribute("disabled");
        } else {
            let _ = el.set_attribute("disabled", "");
        }
    }
}
