//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are the single source of truth the
//! renderer draws from: filtering, paging, selection gating, and number
//! formatting are all resolved before a view model is handed over, and the
//! renderer derives none of it.
//!
//! A view model is computed per frame via `AppState::compute_viewmodel()` and
//! contains no business logic, only display-ready data.

/// Renderable state of whichever screen is currently mounted.
#[derive(Debug, Clone)]
pub enum ScreenView {
    List(ListViewModel),
    Detail(DetailViewModel),
}

/// Complete view model for the country list screen.
///
/// Exactly one of `status`, `empty_state`, or `rows` carries the body
/// content: a loading or failed screen renders its banner and nothing else,
/// an empty filter result renders the empty state, and otherwise the table
/// rows render.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Header information (branding, filtered count).
    pub header: HeaderInfo,

    /// Search input box, present only in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Pick-count summary and compare gating.
    pub selection: SelectionInfo,

    /// Loading or failure banner replacing the table body.
    pub status: Option<StatusLine>,

    /// "no results" message, present when the filter matched nothing.
    pub empty_state: Option<EmptyState>,

    /// Visible table rows (the windowed slice of the current page).
    pub rows: Vec<CountryRow>,

    /// Index of the cursor row within `rows`.
    pub cursor: usize,

    /// Page controls, present only when there is more than one page.
    pub pagination: Option<PaginationInfo>,

    /// Footer keybinding hints.
    pub footer: FooterInfo,

    /// Comparison overlay contents, present only while the overlay is open.
    pub compare: Option<CompareViewModel>,
}

/// One rendered table row.
#[derive(Debug, Clone)]
pub struct CountryRow {
    /// Index of this row within the current page slice, used to address the
    /// row in input events.
    pub page_index: usize,

    /// Common name, truncated for the column.
    pub name: String,

    pub region: String,

    /// Population with thousands separators.
    pub population: String,

    /// Pick slot (0 or 1) when this country is in the comparison set.
    pub pick_slot: Option<usize>,

    /// True when the set is full and this row is not part of it; its pick
    /// control renders dimmed.
    pub pick_blocked: bool,

    /// Whether the cursor rests on this row.
    pub is_cursor: bool,

    /// Character ranges of the name matching the search query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Pick-count summary next to the compare control.
#[derive(Debug, Clone)]
pub struct SelectionInfo {
    pub picked: usize,
    pub capacity: usize,
    /// True iff exactly `capacity` countries are picked.
    pub compare_enabled: bool,
}

/// Page indicator and control enablement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Zero-based current page.
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Full-width banner shown in place of the screen body.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// Message shown when the filter matched nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message, names the failing search term.
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g. "j/k: move  /: search  q: quit").
    pub keybindings: String,
}

/// Search input box contents.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Comparison overlay contents: one card per picked country, in pick order.
#[derive(Debug, Clone)]
pub struct CompareViewModel {
    pub cards: Vec<CompareCard>,
}

/// One side of the comparison overlay, all values pre-formatted.
#[derive(Debug, Clone)]
pub struct CompareCard {
    pub name: String,
    pub flag_alt: String,
    pub population: String,
    /// Area with unit suffix.
    pub area: String,
    pub gdp: String,
}

/// Complete view model for the country detail screen.
///
/// `status` and `body` are mutually exclusive; a loading, failed, or
/// not-found screen has no body.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    pub status: Option<StatusLine>,
    pub body: Option<DetailBody>,
    pub footer: FooterInfo,
}

/// Fully loaded detail page content.
#[derive(Debug, Clone)]
pub struct DetailBody {
    /// Official name, rendered as the page title.
    pub title: String,

    /// Labeled facts in display order; absent source fields are simply not
    /// listed.
    pub facts: Vec<DetailFact>,

    pub flag_alt: String,
    pub flag_png: String,

    /// Coat-of-arms image URL, when the source provides one.
    pub coat_of_arms_png: Option<String>,
}

/// One labeled line of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFact {
    pub label: String,
    pub value: String,
}
