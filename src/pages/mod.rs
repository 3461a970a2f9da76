//! The documentation routes and their demo catalogs.
//!
//! Pages are data. Each route owns a static list of [`DemoCard`]s; every
//! card is a snippet source — its TSX source can be published to the
//! pullout or copied to the clipboard. Rendering a page is a pure function
//! of (route, UiState), done in `ui.rs`; nothing here touches the store.

mod buttons;
mod grid;
mod home;
mod icons;

pub use grid::{
    filtered_by_quote, grouped_by_base, market_data, page, row_details, sorted_desc, Market,
};
pub use icons::CurrencyIcon;

use crate::{Error, Result};

/// Static paths of the tour. No route carries parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Buttons,
    CurrencyIcons,
    GridBasics,
    GridLoadingEmpty,
    GridPagination,
    GridSorting,
    GridFiltering,
    GridMasterDetails,
    GridRowChildren,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Home,
        Route::Buttons,
        Route::CurrencyIcons,
        Route::GridBasics,
        Route::GridLoadingEmpty,
        Route::GridPagination,
        Route::GridSorting,
        Route::GridFiltering,
        Route::GridMasterDetails,
        Route::GridRowChildren,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Buttons => "/buttons",
            Route::CurrencyIcons => "/currency-icons",
            Route::GridBasics => "/grid",
            Route::GridLoadingEmpty => "/grid/loading-empty-state",
            Route::GridPagination => "/grid/pagination",
            Route::GridSorting => "/grid/sorting",
            Route::GridFiltering => "/grid/filtering",
            Route::GridMasterDetails => "/grid/master-details",
            Route::GridRowChildren => "/grid/row-children",
        }
    }

    pub fn from_path(path: &str) -> Result<Route> {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Route::ALL
            .into_iter()
            .find(|r| r.path() == trimmed)
            .ok_or_else(|| Error::UnknownRoute(path.to_string()))
    }

    /// Page title shown in the header.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Buttons => "Buttons",
            Route::CurrencyIcons => "Currency Icons",
            Route::GridBasics => "Grid",
            Route::GridLoadingEmpty => "Grid Loading/Empty",
            Route::GridPagination => "Grid Pagination",
            Route::GridSorting => "Grid Sorting",
            Route::GridFiltering => "Grid Filtering",
            Route::GridMasterDetails => "Grid Master-details",
            Route::GridRowChildren => "Grid Row children",
        }
    }

    /// Label in the sidebar menu. Grid variants are nested entries.
    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Buttons => "Buttons",
            Route::CurrencyIcons => "Currency Icons",
            Route::GridBasics => "Grid: Basics",
            Route::GridLoadingEmpty => "Grid: Loading/Empty",
            Route::GridPagination => "Grid: Pagination",
            Route::GridSorting => "Grid: Sorting",
            Route::GridFiltering => "Grid: Filtering",
            Route::GridMasterDetails => "Grid: Master-details",
            Route::GridRowChildren => "Grid: Row children",
        }
    }

    pub fn index(self) -> usize {
        Route::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    pub fn next(self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    pub fn prev(self) -> Route {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }

    pub fn cards(self) -> &'static [DemoCard] {
        match self {
            Route::Home => home::CARDS,
            Route::Buttons => buttons::CARDS,
            Route::CurrencyIcons => icons::CARDS,
            Route::GridBasics => grid::BASICS_CARDS,
            Route::GridLoadingEmpty => grid::LOADING_EMPTY_CARDS,
            Route::GridPagination => grid::PAGINATION_CARDS,
            Route::GridSorting => grid::SORTING_CARDS,
            Route::GridFiltering => grid::FILTERING_CARDS,
            Route::GridMasterDetails => grid::MASTER_DETAILS_CARDS,
            Route::GridRowChildren => grid::ROW_CHILDREN_CARDS,
        }
    }
}

/// One demo tile: a title, a live demo, and the TSX source behind it.
pub struct DemoCard {
    pub title: &'static str,
    pub snippet: &'static str,
    pub demo: Demo,
}

/// What the card displays. The widgets themselves come from the toolkit;
/// the tour only arranges data for them.
pub enum Demo {
    Prose(&'static str),
    Buttons(&'static [ButtonSpec]),
    Icon(&'static CurrencyIcon),
    Market(MarketView),
    Products {
        rows: &'static [(&'static str, &'static str)],
        loading: bool,
        no_data_text: Option<&'static str>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Secondary,
    Ghost,
    Danger,
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub emphasis: Emphasis,
    pub disabled: bool,
    pub loading: bool,
    pub compact: bool,
    pub decorator_left: Option<&'static str>,
    pub decorator_right: Option<&'static str>,
}

impl ButtonSpec {
    pub const fn new(label: &'static str, emphasis: Emphasis) -> Self {
        Self {
            label,
            emphasis,
            disabled: false,
            loading: false,
            compact: false,
            decorator_left: None,
            decorator_right: None,
        }
    }
}

/// Pre-shaped views of the market dataset for the grid variant pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketView {
    Basic,
    Paginated { page_size: usize },
    Sorted,
    Filtered { quote: &'static str },
    MasterDetails,
    RowChildren,
}
