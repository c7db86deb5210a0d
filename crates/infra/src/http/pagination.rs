//! Pagination strategies
//!
//! The three upstream endpoint families page differently; all three are
//! expressed through one cursor contract so the collection engine stays
//! idiom-free: given the last page's context, should collection continue,
//! and with what request parameters?

use ghreport_domain::constants::DEFAULT_PER_PAGE;

/// What the collector learned from the last page, fed back to the cursor.
#[derive(Debug, Default, Clone)]
pub struct PageContext {
    /// Items extracted from the page envelope.
    pub items_returned: usize,
    /// Server-reported `totalResults` (index/count envelopes only).
    pub total_results: Option<u64>,
    /// Server-reported `itemsPerPage` (index/count envelopes only).
    pub items_per_page: Option<u64>,
    /// Whether the response carried a `Link` header with a `next` relation.
    pub has_next_link: bool,
}

/// Cursor over a paginated endpoint; one variant per pagination idiom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// `page`/`per_page` params; stops on a short page.
    PageNumber { page: u32, per_page: u32 },
    /// `startIndex`/`count` params; advances by the server-reported
    /// `itemsPerPage`, stops past `totalResults`, and stops immediately when
    /// `itemsPerPage` is absent or zero (malformed-page loop guard).
    IndexCount { start_index: u64, count: u32 },
    /// `page`/`per_page` params, but continuation is decided solely by the
    /// `Link: rel="next"` header; short pages are not a stop signal here.
    LinkHeader { page: u32, per_page: u32 },
}

impl PageCursor {
    pub fn page_number() -> Self {
        Self::PageNumber { page: 1, per_page: DEFAULT_PER_PAGE }
    }

    pub fn index_count() -> Self {
        Self::IndexCount { start_index: 1, count: DEFAULT_PER_PAGE }
    }

    pub fn link_header() -> Self {
        Self::LinkHeader { page: 1, per_page: DEFAULT_PER_PAGE }
    }

    /// Query parameters for the current page.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::PageNumber { page, per_page } | Self::LinkHeader { page, per_page } => {
                vec![("per_page", per_page.to_string()), ("page", page.to_string())]
            }
            Self::IndexCount { start_index, count } => {
                vec![("startIndex", start_index.to_string()), ("count", count.to_string())]
            }
        }
    }

    /// Decide whether collection continues, and where.
    pub fn advance(self, ctx: &PageContext) -> Option<Self> {
        match self {
            Self::PageNumber { page, per_page } => {
                if ctx.items_returned < per_page as usize {
                    None
                } else {
                    Some(Self::PageNumber { page: page + 1, per_page })
                }
            }
            Self::IndexCount { start_index, count } => {
                let step = ctx.items_per_page.unwrap_or(0);
                if step == 0 {
                    return None;
                }
                let next = start_index + step;
                if next > ctx.total_results.unwrap_or(0) {
                    None
                } else {
                    Some(Self::IndexCount { start_index: next, count })
                }
            }
            Self::LinkHeader { page, per_page } => {
                if ctx.has_next_link {
                    Some(Self::LinkHeader { page: page + 1, per_page })
                } else {
                    None
                }
            }
        }
    }

    /// Whether this cursor's endpoint family expects the inter-page
    /// courtesy delay.
    pub fn wants_courtesy_delay(&self) -> bool {
        matches!(self, Self::LinkHeader { .. })
    }
}

/// True when a `Link` header value advertises a `next` relation.
///
/// The header is a comma-separated list of `<url>; rel="kind"` entries; only
/// the relation is inspected.
pub fn link_has_next(link_header: &str) -> bool {
    link_header.split(',').any(|entry| {
        entry
            .split(';')
            .skip(1)
            .any(|param| matches!(param.trim(), r#"rel="next""# | "rel=next"))
    })
}
