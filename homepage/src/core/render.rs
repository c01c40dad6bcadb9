//! Card rendering
//!
//! Turns selected [`ProjectItem`]s into display cards and mounts them on a
//! [`DisplaySurface`]. Markup is produced with maud, so every piece of item
//! text is escaped on the way out.

use maud::{Markup, html};
use shared::{DEFAULT_TITLE, PLACEHOLDER_LINK, ProcessId, ProjectItem, process_debug};

use crate::traits::DisplaySurface;

/// Generic label used when an item has no tag
pub const DEFAULT_LABEL: &str = DEFAULT_TITLE;

/// Placeholder image for a card, as an SVG data URI
pub fn placeholder_svg(title: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='800' height='500'>\
         <defs><linearGradient id='g' x1='0' x2='1'>\
         <stop offset='0%' stop-color='#1fa2ff'/>\
         <stop offset='50%' stop-color='#12d8fa'/>\
         <stop offset='100%' stop-color='#a6ffcb'/>\
         </linearGradient></defs>\
         <rect width='100%' height='100%' fill='#e9eef4'/>\
         <rect x='20' y='20' width='760' height='460' rx='20' fill='url(#g)' opacity='.08'/>\
         <text x='50%' y='50%' fill='#0f1222' opacity='.65' text-anchor='middle' \
         dominant-baseline='middle' font-family='Poppins' font-size='28'>{}</text></svg>",
        escape_xml_text(title)
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

fn escape_xml_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Where a card link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A real destination, opened in a new browsing context
    NewContext,
    /// The placeholder anchor, kept in the current context
    SameContext,
}

impl LinkTarget {
    pub fn as_attr(&self) -> &'static str {
        match self {
            LinkTarget::NewContext => "_blank",
            LinkTarget::SameContext => "_self",
        }
    }
}

/// Card navigation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub href: String,
    pub target: LinkTarget,
}

/// Card thumbnail with an explicit fallback on load failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    src: String,
    alt: String,
    fallback: String,
}

impl CardImage {
    pub fn for_item(item: &ProjectItem) -> Self {
        let fallback = placeholder_svg(&item.title);
        let src = if item.image_ref.is_empty() {
            fallback.clone()
        } else {
            item.image_ref.clone()
        };

        Self {
            src,
            alt: item.title.clone(),
            fallback,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn is_placeholder(&self) -> bool {
        self.src == self.fallback
    }

    /// Swap to the placeholder after the image reference failed to load
    pub fn on_load_failure(&mut self) {
        self.src = self.fallback.clone();
    }

    /// Browser-side counterpart of [`CardImage::on_load_failure`]
    fn onerror_script(&self) -> String {
        format!("this.onerror=null;this.src='{}';", self.fallback)
    }

    pub fn to_markup(&self) -> Markup {
        html! {
            img.thumb src=(self.src) alt=(self.alt) loading="lazy" onerror=(self.onerror_script());
        }
    }
}

/// One display unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub image: CardImage,
    pub label: String,
    pub title: String,
    pub description: String,
    pub link: CardLink,
}

impl Card {
    pub fn from_item(item: &ProjectItem) -> Self {
        let target = if item.has_real_link() {
            LinkTarget::NewContext
        } else {
            LinkTarget::SameContext
        };
        let href = if item.link.is_empty() { PLACEHOLDER_LINK.to_string() } else { item.link.clone() };

        Self {
            image: CardImage::for_item(item),
            label: item.tag_label().to_string(),
            title: item.title.clone(),
            description: item.description.clone(),
            link: CardLink { href, target },
        }
    }

    pub fn to_markup(&self) -> Markup {
        html! {
            article.card {
                (self.image.to_markup())
                div.content {
                    span.pill { (self.label) }
                    h3 { (self.title) }
                    p { (self.description) }
                    a href=(self.link.href) target=(self.link.target.as_attr()) rel="noopener" {
                        "View project →"
                    }
                }
            }
        }
    }
}

/// Element cards are mounted into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountPoint {
    cards: Vec<Card>,
}

impl MountPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn to_markup(&self) -> Markup {
        html! {
            @for card in &self.cards {
                (card.to_markup())
            }
        }
    }
}

/// Renders items into a named mount point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    mount_id: String,
}

impl Renderer {
    pub fn new(mount_id: impl Into<String>) -> Self {
        Self { mount_id: mount_id.into() }
    }

    /// Replace the mount point content with one card per item.
    ///
    /// Returns whether anything was rendered; a surface without the mount
    /// point is left untouched.
    pub fn render<D: DisplaySurface + ?Sized>(&self, surface: &mut D, items: &[ProjectItem]) -> bool {
        let Some(mount) = surface.mount_point(&self.mount_id) else {
            process_debug!(ProcessId::current(), "No #{} on the page, skipping render", self.mount_id);
            return false;
        };

        mount.clear();
        for item in items {
            mount.append(Card::from_item(item));
        }
        true
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("project-grid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::PageSurface;

    fn item(title: &str) -> ProjectItem {
        ProjectItem {
            title: title.to_string(),
            ..ProjectItem::default()
        }
    }

    #[test]
    fn test_placeholder_is_encoded_svg_with_escaped_title() {
        let uri = placeholder_svg("Tom & <Jerry>");
        assert!(uri.starts_with("data:image/svg+xml,"));

        let decoded = urlencoding::decode(uri.trim_start_matches("data:image/svg+xml,")).unwrap();
        assert!(decoded.contains("Tom &amp; &lt;Jerry&gt;</text>"));
        assert!(decoded.contains("width='800' height='500'"));
        assert!(!uri.contains('\''));
    }

    #[test]
    fn test_image_falls_back_to_placeholder() {
        let mut with_ref = item("Chair");
        with_ref.image_ref = "Modelado/chair.png".to_string();

        let mut image = CardImage::for_item(&with_ref);
        assert_eq!(image.src(), "Modelado/chair.png");
        assert!(!image.is_placeholder());

        image.on_load_failure();
        assert_eq!(image.src(), placeholder_svg("Chair"));
        assert!(image.is_placeholder());

        let missing = CardImage::for_item(&item("Chair"));
        assert!(missing.is_placeholder());
        assert_eq!(missing.alt(), "Chair");
    }

    #[test]
    fn test_link_target_only_opens_real_links() {
        let placeholder = Card::from_item(&item("A"));
        assert_eq!(placeholder.link.href, "#");
        assert_eq!(placeholder.link.target, LinkTarget::SameContext);

        let mut linked = item("B");
        linked.link = "https://example.com/b".to_string();
        let card = Card::from_item(&linked);
        assert_eq!(card.link.target, LinkTarget::NewContext);

        let markup = card.to_markup().into_string();
        assert!(markup.contains(r#"href="https://example.com/b" target="_blank" rel="noopener""#));
    }

    #[test]
    fn test_card_label_defaults_to_project() {
        assert_eq!(Card::from_item(&item("A")).label, DEFAULT_LABEL);

        let mut tagged = item("A");
        tagged.tag = "Musica".to_string();
        assert_eq!(Card::from_item(&tagged).label, "Musica");
    }

    #[test]
    fn test_card_markup_escapes_text() {
        let mut risky = item("<script>alert(1)</script>");
        risky.description = "Fish & chips".to_string();

        let markup = Card::from_item(&risky).to_markup().into_string();
        assert!(markup.contains("&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("Fish &amp; chips"));
        assert!(markup.contains(r#"class="thumb""#));
        assert!(markup.contains(r#"loading="lazy""#));
        assert!(markup.contains("onerror="));
    }

    #[test]
    fn test_render_replaces_content_in_order() {
        let renderer = Renderer::default();
        let mut surface = PageSurface::with_mount("project-grid");

        assert!(renderer.render(&mut surface, &[item("old")]));
        assert!(renderer.render(&mut surface, &[item("one"), item("two")]));

        let mount = surface.mount_point("project-grid").unwrap();
        let titles: Vec<&str> = mount.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[test]
    fn test_render_empty_clears_mount() {
        let renderer = Renderer::default();
        let mut surface = PageSurface::with_mount("project-grid");
        renderer.render(&mut surface, &[item("old")]);

        assert!(renderer.render(&mut surface, &[]));
        assert!(surface.mount_point("project-grid").unwrap().is_empty());
    }

    #[test]
    fn test_render_without_mount_is_noop() {
        let renderer = Renderer::new("project-grid");
        let mut surface = PageSurface::with_mount("somewhere-else");

        assert!(!renderer.render(&mut surface, &[item("A")]));
        assert!(surface.mount_point("somewhere-else").unwrap().is_empty());
        assert!(surface.mount_point("project-grid").is_none());
    }
}
