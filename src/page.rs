//! Page content model and render-time placeholder substitution.

use twilight_model::channel::message::embed::Embed;

use crate::error::PaginationError;

/// Placeholder replaced with the 1-based page number at render time.
pub const CURRENT_PAGE_PLACEHOLDER: &str = "{current_page}";
/// Placeholder replaced with the total page count at render time.
pub const TOTAL_PAGES_PLACEHOLDER: &str = "{total_pages}";

/// One unit of paginated content.
#[derive(Debug, Clone)]
pub enum Page {
    /// Plain message content.
    Text(String),
    /// Rich embed content.
    Embed(Embed),
}

/// A page resolved for display at a specific index.
#[derive(Debug, Clone)]
pub enum RenderedPage {
    Text(String),
    Embed(Embed),
}

/// Immutable, ordered, non-empty collection of pages of a single kind.
#[derive(Debug, Clone)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    /// Build a page set from plain text contents.
    pub fn text(contents: Vec<String>) -> Result<Self, PaginationError> {
        if contents.is_empty() {
            return Err(PaginationError::InvalidConfiguration(
                "page set must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            pages: contents.into_iter().map(Page::Text).collect(),
        })
    }

    /// Build a page set from rich embeds.
    pub fn embeds(embeds: Vec<Embed>) -> Result<Self, PaginationError> {
        if embeds.is_empty() {
            return Err(PaginationError::InvalidConfiguration(
                "page set must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            pages: embeds.into_iter().map(Page::Embed).collect(),
        })
    }

    /// Build a page set from either text contents or embeds.
    ///
    /// Exactly one of the two inputs must be non-empty; a page set is
    /// homogeneous in kind.
    pub fn new(contents: Vec<String>, embeds: Vec<Embed>) -> Result<Self, PaginationError> {
        match (contents.is_empty(), embeds.is_empty()) {
            (true, true) => Err(PaginationError::InvalidConfiguration(
                "either contents or embeds must be provided".to_owned(),
            )),
            (false, false) => Err(PaginationError::InvalidConfiguration(
                "contents and embeds cannot be mixed in one page set".to_owned(),
            )),
            (false, true) => Self::text(contents),
            (true, false) => Self::embeds(embeds),
        }
    }

    /// Number of pages. Always at least 1.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`; a page set is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Resolve the page at `index` for display.
    ///
    /// When `fill_index` is set, `{current_page}` and `{total_pages}`
    /// placeholders in every text-bearing field are substituted with the
    /// 1-based page number and the page count. Otherwise placeholders are
    /// left verbatim.
    pub fn render(&self, index: usize, fill_index: bool) -> Result<RenderedPage, PaginationError> {
        let Some(page) = self.pages.get(index) else {
            return Err(PaginationError::PageOutOfRange {
                index,
                len: self.len(),
            });
        };

        let rendered = match page {
            Page::Text(content) => {
                let content = if fill_index {
                    fill_placeholders(content, index + 1, self.len())
                } else {
                    content.clone()
                };
                RenderedPage::Text(content)
            }
            Page::Embed(embed) => {
                let embed = if fill_index {
                    fill_embed(embed, index + 1, self.len())
                } else {
                    embed.clone()
                };
                RenderedPage::Embed(embed)
            }
        };

        Ok(rendered)
    }
}

fn fill_placeholders(text: &str, current_page: usize, total_pages: usize) -> String {
    text.replace(CURRENT_PAGE_PLACEHOLDER, &current_page.to_string())
        .replace(TOTAL_PAGES_PLACEHOLDER, &total_pages.to_string())
}

fn fill_embed(embed: &Embed, current_page: usize, total_pages: usize) -> Embed {
    let mut embed = embed.clone();

    if let Some(title) = embed.title.as_ref() {
        embed.title = Some(fill_placeholders(title, current_page, total_pages));
    }

    if let Some(description) = embed.description.as_ref() {
        embed.description = Some(fill_placeholders(description, current_page, total_pages));
    }

    if let Some(footer) = embed.footer.as_mut() {
        footer.text = fill_placeholders(&footer.text, current_page, total_pages);
    }

    for field in &mut embed.fields {
        field.name = fill_placeholders(&field.name, current_page, total_pages);
        field.value = fill_placeholders(&field.value, current_page, total_pages);
    }

    embed
}

#[cfg(test)]
mod tests {
    use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

    use super::*;

    fn text_pages(contents: &[&str]) -> PageSet {
        PageSet::text(contents.iter().map(|c| (*c).to_owned()).collect())
            .expect("valid text page set")
    }

    fn bare_embed() -> Embed {
        EmbedBuilder::new().build()
    }

    #[test]
    fn test_empty_page_set_rejected() {
        assert!(matches!(
            PageSet::text(Vec::new()),
            Err(PaginationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            PageSet::new(Vec::new(), Vec::new()),
            Err(PaginationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_mixed_page_kinds_rejected() {
        let result = PageSet::new(vec!["text".to_owned()], vec![bare_embed()]);
        assert!(matches!(
            result,
            Err(PaginationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_render_out_of_range() {
        let pages = text_pages(&["A", "B"]);
        assert!(matches!(
            pages.render(2, false),
            Err(PaginationError::PageOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_render_text_without_fill_leaves_placeholders() {
        let pages = text_pages(&["page {current_page} of {total_pages}"]);
        let RenderedPage::Text(content) = pages.render(0, false).expect("render") else {
            panic!("expected text page");
        };
        assert_eq!(content, "page {current_page} of {total_pages}");
    }

    #[test]
    fn test_render_text_with_fill() {
        let pages = text_pages(&["first", "page {current_page} of {total_pages}"]);
        let RenderedPage::Text(content) = pages.render(1, true).expect("render") else {
            panic!("expected text page");
        };
        assert_eq!(content, "page 2 of 2");
    }

    #[test]
    fn test_render_embed_fills_all_text_fields() {
        let embed = EmbedBuilder::new()
            .title("Title {current_page}")
            .description("{current_page}/{total_pages}")
            .footer(EmbedFooterBuilder::new("Page {current_page}").build())
            .field(EmbedFieldBuilder::new("n {total_pages}", "v {current_page}").build())
            .build();

        let pages = PageSet::embeds(vec![embed, bare_embed(), bare_embed()]).expect("page set");
        let RenderedPage::Embed(rendered) = pages.render(0, true).expect("render") else {
            panic!("expected embed page");
        };

        assert_eq!(rendered.title.as_deref(), Some("Title 1"));
        assert_eq!(rendered.description.as_deref(), Some("1/3"));
        assert_eq!(rendered.footer.expect("footer").text, "Page 1");
        assert_eq!(rendered.fields[0].name, "n 3");
        assert_eq!(rendered.fields[0].value, "v 1");
    }
}
