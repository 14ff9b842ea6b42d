//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, holding whichever screen is currently mounted. Each screen owns
//! its complete interactive state; navigating away drops the old screen
//! wholesale, which is also what makes stale fetch results harmless (their
//! generation no longer matches any live screen).
//!
//! # State Components
//!
//! - **Route**: which screen is mounted, list or detail
//! - **List screen**: fetched countries, the derived filtered list, search
//!   query, page index, cursor, comparison picks, and overlay state
//! - **Detail screen**: the requested name and the lookup outcome
//!
//! # View Model Computation
//!
//! `compute_viewmodel` transforms a state snapshot into a renderable
//! representation: windowed table rows, match highlighting, formatted
//! numbers, pagination controls, and overlay contents. The renderer consumes
//! that result verbatim and derives nothing on its own.

use crate::app::modes::{InputMode, ModalState, SearchFocus};
use crate::app::pager::{self, PAGE_SIZE};
use crate::app::selection::SelectionSet;
use crate::domain::Country;
use crate::ui::components::{
    LIST_CHROME_ROWS_NORMAL, LIST_CHROME_ROWS_SEARCH, LIST_TABLE_FIRST_ROW_NORMAL,
    LIST_TABLE_FIRST_ROW_SEARCH, PICK_ZONE_WIDTH,
};
use crate::ui::helpers::{format_area, format_thousands, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CompareCard, CompareViewModel, CountryRow, DetailBody, DetailFact, DetailViewModel,
    EmptyState, FooterInfo, HeaderInfo, ListViewModel, PaginationInfo, ScreenView,
    SearchBarInfo, SelectionInfo, StatusLine,
};

/// Display width of the name column in the list table.
const NAME_COLUMN_CHARS: usize = 30;

/// Display width of the region column in the list table.
const REGION_COLUMN_CHARS: usize = 14;

/// Lifecycle phase of the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    /// The initial fetch (or its decode) has not resolved yet. No search,
    /// paging, or pick transitions are possible in this phase.
    Loading,
    /// The fetch failed; the message renders verbatim. Terminal for this
    /// mount, retry means remounting.
    Failed(String),
    /// Countries are loaded and the screen is interactive.
    Ready,
}

/// Lifecycle phase of the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    Loading,
    Failed(String),
    /// The lookup completed but matched nothing. Distinct from [`Failed`](Self::Failed)
    /// and rendered as its own state rather than an error banner.
    NotFound,
    Ready(Country),
}

/// Which screen is mounted.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    List(ListScreen),
    Detail(DetailScreen),
}

/// Zone of the list table a pointer event landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    /// The pick control column at the left edge of a row.
    PickControl,
    /// The rest of the row.
    Row,
}

/// Resolved pointer hit on a list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListHit {
    /// Index of the row within the current page slice.
    pub page_index: usize,
    pub zone: HitZone,
}

/// Interactive state of the country list screen.
///
/// `filtered` is derived from `countries` and `search_query` by
/// [`apply_search_filter`](Self::apply_search_filter); everything else reads
/// the derived list. The comparison picks live independently of filtering and
/// paging: they accumulate over the full identity space and survive any
/// filter or page change.
#[derive(Debug, Clone, PartialEq)]
pub struct ListScreen {
    pub phase: ListPhase,

    /// Full normalized list in source order.
    pub countries: Vec<Country>,

    /// Countries matching the current search query, in source order.
    pub filtered: Vec<Country>,

    /// Live search text, updated on every keystroke.
    pub search_query: String,

    /// Zero-based current page over `filtered`.
    pub page: usize,

    /// Cursor position within the current page slice.
    pub cursor: usize,

    /// Comparison picks, capacity 2.
    pub selection: SelectionSet,

    /// Comparison overlay state.
    pub modal: ModalState,

    pub input_mode: InputMode,

    /// Mount generation; fetch results carrying another generation are
    /// ignored.
    pub generation: u64,
}

impl ListScreen {
    /// Creates a loading list screen for a fresh mount.
    #[must_use]
    pub fn new(generation: u64) -> Self {
        Self {
            phase: ListPhase::Loading,
            countries: Vec::new(),
            filtered: Vec::new(),
            search_query: String::new(),
            page: 0,
            cursor: 0,
            selection: SelectionSet::new(),
            modal: ModalState::Closed,
            input_mode: InputMode::Normal,
            generation,
        }
    }

    /// Recomputes `filtered` from the master list and the current query.
    ///
    /// The result is an order-preserving subsequence of `countries`. The
    /// cursor is clamped to the rows that remain visible; the page index is
    /// deliberately NOT touched here, because only a search-text change may
    /// reset it and that decision belongs to [`search_changed`](Self::search_changed).
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_countries = self.countries.len(),
            query_len = self.search_query.len(),
        )
        .entered();

        let needle = self.search_query.to_lowercase();
        self.filtered = self
            .countries
            .iter()
            .filter(|country| country.matches(&needle))
            .cloned()
            .collect();

        let visible_len = self.visible_rows().len();
        if visible_len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(visible_len - 1);
        }

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    /// Applies a search-text change: filter recomputation plus the reset of
    /// page and cursor to the top of the results.
    pub fn search_changed(&mut self) {
        self.page = 0;
        self.cursor = 0;
        self.apply_search_filter();
    }

    /// The slice of `filtered` belonging to the current page.
    #[must_use]
    pub fn visible_rows(&self) -> &[Country] {
        pager::paginate(&self.filtered, self.page, PAGE_SIZE)
    }

    /// Number of pages over the filtered list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.filtered.len(), PAGE_SIZE)
    }

    /// Returns the country at a page-slice index, if the row exists.
    #[must_use]
    pub fn country_on_page(&self, page_index: usize) -> Option<&Country> {
        self.visible_rows().get(page_index)
    }

    /// Moves the cursor down one row, wrapping to the top of the page.
    pub fn move_cursor_down(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the cursor up one row, wrapping to the bottom of the page.
    pub fn move_cursor_up(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            return;
        }
        if self.cursor == 0 {
            self.cursor = len - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Advances to the next page if one exists. Returns whether the page
    /// changed.
    pub fn next_page(&mut self) -> bool {
        if pager::next_enabled(self.page, self.total_pages()) {
            self.page += 1;
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    /// Returns to the previous page if one exists. Returns whether the page
    /// changed.
    pub fn prev_page(&mut self) -> bool {
        if pager::prev_enabled(self.page) {
            self.page -= 1;
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    /// Window of the page slice that fits the terminal, as `(start, end)`
    /// indices into the page slice.
    ///
    /// Centers the cursor when the page has more rows than fit, following the
    /// usual windowing rules (pin to the edges near the start and end).
    #[must_use]
    pub fn visible_window(&self, terminal_rows: usize) -> (usize, usize) {
        let page_len = self.visible_rows().len();
        let available = self.available_body_rows(terminal_rows);
        if available == 0 || page_len == 0 {
            return (0, 0);
        }

        let mut start = self.cursor.saturating_sub(available / 2);
        let end = (start + available).min(page_len);
        if end - start < available && page_len >= available {
            start = end.saturating_sub(available);
        }
        (start, end)
    }

    /// Rows left for table content after subtracting UI chrome.
    const fn available_body_rows(&self, terminal_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => terminal_rows.saturating_sub(LIST_CHROME_ROWS_NORMAL),
            InputMode::Search(_) => terminal_rows.saturating_sub(LIST_CHROME_ROWS_SEARCH),
        }
    }

    /// First terminal row occupied by table content in the current mode.
    const fn table_first_row(&self) -> usize {
        match self.input_mode {
            InputMode::Normal => LIST_TABLE_FIRST_ROW_NORMAL,
            InputMode::Search(_) => LIST_TABLE_FIRST_ROW_SEARCH,
        }
    }

    /// Character ranges of `name` matching the current query, for highlight
    /// rendering. At most one range; empty when the query is empty or the
    /// match was on code or region only.
    fn match_ranges(&self, name: &str) -> Vec<(usize, usize)> {
        if self.search_query.is_empty() {
            return Vec::new();
        }
        let needle = self.search_query.to_lowercase();
        let lowered = name.to_lowercase();
        match lowered.find(&needle) {
            Some(byte_idx) => {
                let start = lowered[..byte_idx].chars().count();
                let len = needle.chars().count();
                vec![(start, start + len)]
            }
            None => Vec::new(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.phase {
            ListPhase::Ready => format!(" Global Explorer ({}) ", self.filtered.len()),
            _ => " Global Explorer ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.modal.is_open() {
            "ESC or c: close comparison".to_string()
        } else {
            match (self.input_mode, &self.phase) {
                (_, ListPhase::Loading | ListPhase::Failed(_)) => "q: quit".to_string(),
                (InputMode::Normal, ListPhase::Ready) => {
                    "j/k: move  h/l: page  Space: pick  Enter: details  c: compare  /: search  q: quit"
                        .to_string()
                }
                (InputMode::Search(SearchFocus::Typing), ListPhase::Ready) => {
                    "ESC: cancel search  Enter: browse results  Type to filter".to_string()
                }
                (InputMode::Search(SearchFocus::Navigating), ListPhase::Ready) => {
                    "ESC: exit search  /: edit query  j/k: move  Space: pick  Enter: details"
                        .to_string()
                }
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    fn compute_status(&self) -> Option<StatusLine> {
        match &self.phase {
            ListPhase::Loading => Some(StatusLine {
                text: "Loading countries...".to_string(),
                is_error: false,
            }),
            ListPhase::Failed(message) => Some(StatusLine {
                text: format!("Error: {message}"),
                is_error: true,
            }),
            ListPhase::Ready => None,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.phase != ListPhase::Ready || !self.filtered.is_empty() {
            return None;
        }
        if self.search_query.is_empty() {
            Some(EmptyState {
                message: "No countries available".to_string(),
                subtitle: "The data source returned an empty list.".to_string(),
            })
        } else {
            Some(EmptyState {
                message: format!("No countries found for \"{}\"", self.search_query),
                subtitle: "Try a different name, code, or region.".to_string(),
            })
        }
    }

    fn compute_pagination(&self) -> Option<PaginationInfo> {
        let total = self.total_pages();
        if self.phase != ListPhase::Ready || total <= 1 {
            return None;
        }
        Some(PaginationInfo {
            current_page: self.page,
            total_pages: total,
            prev_enabled: pager::prev_enabled(self.page),
            next_enabled: pager::next_enabled(self.page, total),
        })
    }

    fn compute_compare(&self) -> Option<CompareViewModel> {
        if !self.modal.is_open() {
            return None;
        }
        let cards = self
            .selection
            .picks()
            .iter()
            .map(|country| CompareCard {
                name: country.name.common.clone(),
                flag_alt: country.flag_alt.clone(),
                population: format_thousands(country.population),
                area: format!("{} km\u{b2}", format_area(country.area)),
                gdp: format_thousands(country.gdp_estimate),
            })
            .collect();
        Some(CompareViewModel { cards })
    }

    fn compute_row(&self, country: &Country, page_index: usize) -> CountryRow {
        let picked = self.selection.slot_of(&country.code);
        CountryRow {
            page_index,
            name: truncate(&country.name.common, NAME_COLUMN_CHARS),
            region: truncate(&country.region, REGION_COLUMN_CHARS),
            population: format_thousands(country.population),
            pick_slot: picked,
            pick_blocked: picked.is_none() && self.selection.compare_ready(),
            is_cursor: page_index == self.cursor,
            highlight_ranges: self.match_ranges(&country.name.common),
        }
    }

    /// Computes the renderable view model for this screen.
    ///
    /// # Parameters
    ///
    /// * `terminal_rows` - Terminal height in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, terminal_rows: usize) -> ListViewModel {
        let (window_start, window_end) = self.visible_window(terminal_rows);
        let rows: Vec<CountryRow> = self.visible_rows()[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(offset, country)| self.compute_row(country, window_start + offset))
            .collect();

        ListViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            selection: SelectionInfo {
                picked: self.selection.len(),
                capacity: SelectionSet::CAPACITY,
                compare_enabled: self.selection.compare_ready(),
            },
            status: self.compute_status(),
            empty_state: self.compute_empty_state(),
            cursor: self.cursor.saturating_sub(window_start),
            rows,
            pagination: self.compute_pagination(),
            footer: self.compute_footer(),
            compare: self.compute_compare(),
        }
    }
}

/// Interactive state of the country detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailScreen {
    /// Display form of the looked-up name (unescaped).
    pub requested_name: String,

    pub phase: DetailPhase,

    /// Mount generation; fetch results carrying another generation are
    /// ignored.
    pub generation: u64,
}

impl DetailScreen {
    /// Creates a loading detail screen for a fresh mount.
    #[must_use]
    pub fn new(requested_name: String, generation: u64) -> Self {
        Self {
            requested_name,
            phase: DetailPhase::Loading,
            generation,
        }
    }

    /// Computes the renderable view model for this screen.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DetailViewModel {
        let footer = FooterInfo {
            keybindings: "ESC: back  q: quit".to_string(),
        };

        let status = match &self.phase {
            DetailPhase::Loading => Some(StatusLine {
                text: "Loading country details...".to_string(),
                is_error: false,
            }),
            DetailPhase::Failed(message) => Some(StatusLine {
                text: format!("Error: {message}"),
                is_error: true,
            }),
            DetailPhase::NotFound => Some(StatusLine {
                text: "Country not found.".to_string(),
                is_error: false,
            }),
            DetailPhase::Ready(_) => None,
        };

        let body = match &self.phase {
            DetailPhase::Ready(country) => Some(Self::compute_body(country)),
            _ => None,
        };

        DetailViewModel { status, body, footer }
    }

    fn compute_body(country: &Country) -> DetailBody {
        let mut facts = vec![DetailFact {
            label: "Common Name".to_string(),
            value: country.name.common.clone(),
        }];
        if let Some(capital) = &country.capital {
            facts.push(DetailFact {
                label: "Capital".to_string(),
                value: capital.clone(),
            });
        }
        facts.push(DetailFact {
            label: "Population".to_string(),
            value: format_thousands(country.population),
        });
        facts.push(DetailFact {
            label: "Area".to_string(),
            value: format!("{} km\u{b2}", format_area(country.area)),
        });
        facts.push(DetailFact {
            label: "Region".to_string(),
            value: country.region.clone(),
        });

        DetailBody {
            title: country.name.official.clone(),
            facts,
            flag_alt: country.flag_alt.clone(),
            flag_png: country.flag_png.clone(),
            coat_of_arms_png: country.coat_of_arms_png.clone(),
        }
    }
}

/// Central application state container.
///
/// Owns the mounted screen and the theme, and hands out monotonically
/// increasing mount generations. Mutated by the event handler in response to
/// user input and fetch results; view models are computed on demand from
/// state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Currently mounted screen.
    pub route: Route,

    /// Color scheme for UI rendering, loaded from plugin configuration.
    pub theme: Theme,

    next_generation: u64,
}

impl AppState {
    /// Creates the initial state: a loading list screen with generation 0.
    ///
    /// The real first mount happens once the host grants permissions, via
    /// [`mount_list`](Self::mount_list).
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            route: Route::List(ListScreen::new(0)),
            theme,
            next_generation: 1,
        }
    }

    /// Mounts a fresh list screen, discarding whatever was mounted, and
    /// returns its generation for tagging the fetch.
    pub fn mount_list(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.route = Route::List(ListScreen::new(generation));
        tracing::debug!(generation, "list screen mounted");
        generation
    }

    /// Mounts a fresh detail screen for the given display name, discarding
    /// whatever was mounted, and returns its generation for tagging the
    /// fetch.
    pub fn mount_detail(&mut self, requested_name: String) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        tracing::debug!(generation, name = %requested_name, "detail screen mounted");
        self.route = Route::Detail(DetailScreen::new(requested_name, generation));
        generation
    }

    /// The mounted list screen, if the list route is active.
    #[must_use]
    pub fn list_screen(&self) -> Option<&ListScreen> {
        match &self.route {
            Route::List(screen) => Some(screen),
            Route::Detail(_) => None,
        }
    }

    /// Mutable access to the mounted list screen.
    pub fn list_screen_mut(&mut self) -> Option<&mut ListScreen> {
        match &mut self.route {
            Route::List(screen) => Some(screen),
            Route::Detail(_) => None,
        }
    }

    /// The mounted detail screen, if the detail route is active.
    #[must_use]
    pub fn detail_screen(&self) -> Option<&DetailScreen> {
        match &self.route {
            Route::Detail(screen) => Some(screen),
            Route::List(_) => None,
        }
    }

    /// Mutable access to the mounted detail screen.
    pub fn detail_screen_mut(&mut self) -> Option<&mut DetailScreen> {
        match &mut self.route {
            Route::Detail(screen) => Some(screen),
            Route::List(_) => None,
        }
    }

    /// Computes the renderable view model for the mounted screen.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells (reserved for responsive
    ///   layouts; current components use fixed column widths)
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> ScreenView {
        match &self.route {
            Route::List(screen) => ScreenView::List(screen.compute_viewmodel(rows)),
            Route::Detail(screen) => ScreenView::Detail(screen.compute_viewmodel()),
        }
    }

    /// Resolves a pointer position to a list row and hit zone.
    ///
    /// Returns `None` unless an interactive list table is showing at that
    /// position (list route, ready phase, overlay closed, position inside the
    /// rendered window).
    ///
    /// # Parameters
    ///
    /// * `screen_row` - 1-indexed terminal row of the pointer event
    /// * `screen_col` - 1-indexed terminal column of the pointer event
    /// * `terminal_rows` - Terminal height at the time of the event
    #[must_use]
    pub fn list_hit(
        &self,
        screen_row: usize,
        screen_col: usize,
        terminal_rows: usize,
    ) -> Option<ListHit> {
        let screen = self.list_screen()?;
        if screen.phase != ListPhase::Ready || screen.modal.is_open() {
            return None;
        }

        let first_row = screen.table_first_row();
        if screen_row < first_row {
            return None;
        }
        let offset = screen_row - first_row;
        let (window_start, window_end) = screen.visible_window(terminal_rows);
        if window_start + offset >= window_end {
            return None;
        }

        let zone = if screen_col <= PICK_ZONE_WIDTH {
            HitZone::PickControl
        } else {
            HitZone::Row
        };
        Some(ListHit {
            page_index: window_start + offset,
            zone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryName;

    fn country(common: &str, code: &str, region: &str) -> Country {
        Country {
            name: CountryName {
                common: common.to_string(),
                official: common.to_string(),
            },
            code: code.to_string(),
            region: region.to_string(),
            population: 1_000,
            area: 10.0,
            flag_png: String::new(),
            flag_alt: String::new(),
            gdp_estimate: 500,
            capital: None,
            coat_of_arms_png: None,
        }
    }

    fn ready_screen(countries: Vec<Country>) -> ListScreen {
        let mut screen = ListScreen::new(1);
        screen.countries = countries;
        screen.phase = ListPhase::Ready;
        screen.apply_search_filter();
        screen
    }

    #[test]
    fn filter_keeps_matching_countries_in_original_order() {
        let mut screen = ready_screen(vec![
            country("France", "FRA", "Europe"),
            country("Germany", "DEU", "Europe"),
            country("Japan", "JPN", "Asia"),
        ]);

        screen.search_query = "eu".to_string();
        screen.search_changed();

        let names: Vec<&str> = screen.filtered.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["France", "Germany"]);
    }

    #[test]
    fn filter_matches_on_code_and_region_too() {
        let mut screen = ready_screen(vec![
            country("France", "FRA", "Europe"),
            country("Japan", "JPN", "Asia"),
        ]);

        screen.search_query = "jpn".to_string();
        screen.search_changed();
        assert_eq!(screen.filtered.len(), 1);

        screen.search_query = "ASIA".to_string();
        screen.search_changed();
        assert_eq!(screen.filtered.len(), 1);
        assert_eq!(screen.filtered[0].code, "JPN");
    }

    #[test]
    fn empty_query_matches_everything() {
        let screen = ready_screen(vec![
            country("France", "FRA", "Europe"),
            country("Japan", "JPN", "Asia"),
        ]);

        assert_eq!(screen.filtered.len(), 2);
    }

    #[test]
    fn pagination_controls_hidden_when_one_page_suffices() {
        let screen = ready_screen((0..10).map(|i| country(&format!("C{i}"), &format!("C{i:02}"), "Europe")).collect());

        let vm = screen.compute_viewmodel(40);
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn pagination_controls_shown_past_one_page() {
        let screen = ready_screen((0..12).map(|i| country(&format!("C{i}"), &format!("C{i:02}"), "Europe")).collect());

        let vm = screen.compute_viewmodel(40);
        let pagination = vm.pagination.unwrap();
        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.prev_enabled);
        assert!(pagination.next_enabled);
        assert_eq!(vm.rows.len(), 10);
    }

    #[test]
    fn no_results_renders_an_explicit_empty_state() {
        let mut screen = ready_screen(vec![country("France", "FRA", "Europe")]);
        screen.search_query = "xyz".to_string();
        screen.search_changed();

        let vm = screen.compute_viewmodel(40);
        assert!(vm.rows.is_empty());
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No countries found for \"xyz\"");
    }

    #[test]
    fn match_ranges_cover_the_substring() {
        let mut screen = ready_screen(vec![country("France", "FRA", "Europe")]);
        screen.search_query = "ran".to_string();
        screen.apply_search_filter();

        assert_eq!(screen.match_ranges("France"), vec![(1, 4)]);
        assert!(screen.match_ranges("Germany").is_empty());
    }

    #[test]
    fn cursor_wraps_within_the_page() {
        let mut screen = ready_screen(vec![
            country("France", "FRA", "Europe"),
            country("Germany", "DEU", "Europe"),
        ]);

        screen.move_cursor_up();
        assert_eq!(screen.cursor, 1);
        screen.move_cursor_down();
        assert_eq!(screen.cursor, 0);
    }

    #[test]
    fn hit_test_resolves_pick_zone_and_row_zone() {
        let state = AppState {
            route: Route::List(ready_screen(vec![
                country("France", "FRA", "Europe"),
                country("Germany", "DEU", "Europe"),
            ])),
            theme: Theme::default(),
            next_generation: 2,
        };

        let first_row = LIST_TABLE_FIRST_ROW_NORMAL;
        let pick = state.list_hit(first_row, 2, 40).unwrap();
        assert_eq!(pick.page_index, 0);
        assert_eq!(pick.zone, HitZone::PickControl);

        let row = state.list_hit(first_row + 1, 20, 40).unwrap();
        assert_eq!(row.page_index, 1);
        assert_eq!(row.zone, HitZone::Row);

        assert!(state.list_hit(first_row + 2, 20, 40).is_none());
        assert!(state.list_hit(1, 20, 40).is_none());
    }

    #[test]
    fn hit_test_ignores_non_interactive_phases() {
        let mut screen = ready_screen(vec![country("France", "FRA", "Europe")]);
        screen.modal = ModalState::Open;
        let state = AppState {
            route: Route::List(screen),
            theme: Theme::default(),
            next_generation: 2,
        };

        assert!(state.list_hit(LIST_TABLE_FIRST_ROW_NORMAL, 10, 40).is_none());
    }

    #[test]
    fn mount_generations_increase() {
        let mut state = AppState::new(Theme::default());
        let first = state.mount_list();
        let second = state.mount_detail("France".to_string());
        assert!(second > first);
        assert!(state.detail_screen().is_some());
    }
}
