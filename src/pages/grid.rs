//! Grid demo pages: a shared market dataset and the pre-shaped views the
//! variant pages display.
//!
//! The dataset is embedded (the web tour fetched the same shape from
//! `/products.json`; this tour ships it in the binary). The grid widget
//! itself is the toolkit's — sorting, filtering, and pagination engines are
//! not implemented here, each variant page just hands the widget an
//! already-shaped slice.

use std::sync::OnceLock;

use indoc::indoc;
use serde::Deserialize;

use super::{Demo, DemoCard, MarketView};
use crate::flog_warn;

const MARKETS_JSON: &str = include_str!("markets.json");

pub const PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Market {
    pub id: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub base_min_size: String,
    pub base_max_size: String,
    pub quote_increment: String,
    pub base_increment: String,
    pub display_name: String,
    pub min_market_funds: String,
    pub max_market_funds: String,
    pub margin_enabled: bool,
    pub post_only: bool,
    pub limit_only: bool,
    pub cancel_only: bool,
    pub trading_disabled: bool,
    pub status: String,
    pub status_message: String,
}

static MARKETS: OnceLock<Vec<Market>> = OnceLock::new();

pub fn market_data() -> &'static [Market] {
    MARKETS.get_or_init(|| match serde_json::from_str(MARKETS_JSON) {
        Ok(markets) => markets,
        Err(e) => {
            flog_warn!("embedded market data failed to parse: {}", e);
            Vec::new()
        }
    })
}

/// Markets sorted by id, descending — the default sort the sorting page
/// declares on its market column.
pub fn sorted_desc() -> Vec<&'static Market> {
    let mut markets: Vec<&Market> = market_data().iter().collect();
    markets.sort_by(|a, b| b.id.cmp(&a.id));
    markets
}

/// Markets whose quote currency matches the filter.
pub fn filtered_by_quote(quote: &str) -> Vec<&'static Market> {
    market_data()
        .iter()
        .filter(|m| m.quote_currency == quote)
        .collect()
}

/// The first page of markets.
pub fn page(page_size: usize) -> &'static [Market] {
    let markets = market_data();
    &markets[..markets.len().min(page_size)]
}

/// Detail text for the master-details demo's expanded row.
pub fn row_details(market: &Market) -> String {
    let mut details = format!(
        "{} — min order {} {}, max order {} {}, tick {}",
        market.display_name,
        market.base_min_size,
        market.base_currency,
        market.base_max_size,
        market.base_currency,
        market.quote_increment,
    );
    if !market.status_message.is_empty() {
        details.push_str(" — ");
        details.push_str(&market.status_message);
    }
    details
}

/// Markets grouped for the row-children demo: each base currency's first
/// market is a parent, the rest of its markets are its children.
pub fn grouped_by_base() -> Vec<(&'static Market, Vec<&'static Market>)> {
    let mut groups: Vec<(&Market, Vec<&Market>)> = Vec::new();
    for market in market_data() {
        match groups
            .iter_mut()
            .find(|(parent, _)| parent.base_currency == market.base_currency)
        {
            Some((_, children)) => children.push(market),
            None => groups.push((market, Vec::new())),
        }
    }
    groups
}

pub const BASICS_CARDS: &[DemoCard] = &[DemoCard {
    title: "Default grid",
    snippet: indoc! {r#"
        interface Market {
          marketId: string | number,
          price: string
        }

        const { columns } = useColumns<Market>(() => [
          {
            key: 'marketId',
            headerNode: 'Pair',
            width: 200,
            pin: true,
            getValue: item => item.marketId,
            cellRenderer: marketId => (
              <Icon id={marketId}>{marketId}</Icon>
            )
          },
          {
            key: 'price',
            headerNode: <strong>Price</strong>,
            getValue: item => currencyFmt(item.price),
            width: 'minmax(200px, 1fr)'
          }
        ]);

        const data: Market[] = [
          {
            marketId: 'BTC-USD',
            price: 49020.7
          },
          {
            marketId: 'ETH-GBP',
            price: 1102.0038
          }
        ]

        return <Grid<Market> columns={columns} data={data} getRowId={item => item.marketId} />
    "#},
    demo: Demo::Market(MarketView::Basic),
}];

const PRODUCT_ROWS: &[(&str, &str)] = &[(
    "Premium Domain SSL",
    "Secure your domain with our premium DNS and DDOS protection service.",
)];

const NO_ROWS: &[(&str, &str)] = &[];

pub const LOADING_EMPTY_CARDS: &[DemoCard] = &[
    DemoCard {
        title: "Loading on empty grid",
        snippet: indoc! {r#"
            <Grid columns={columns} data={[]} getRowId={item => item.name} loading />
        "#},
        demo: Demo::Products {
            rows: NO_ROWS,
            loading: true,
            no_data_text: None,
        },
    },
    DemoCard {
        title: "Loading on non-empty grid",
        snippet: indoc! {r#"
            <Grid columns={columns} data={productData} getRowId={item => item.name} loading />
        "#},
        demo: Demo::Products {
            rows: PRODUCT_ROWS,
            loading: true,
            no_data_text: None,
        },
    },
    DemoCard {
        title: "Custom no data message",
        snippet: indoc! {r#"
            <Grid
              columns={columns}
              data={[]}
              getRowId={item => item.name}
              noDataNode={<p>No data to display</p>}
            />
        "#},
        demo: Demo::Products {
            rows: NO_ROWS,
            loading: false,
            no_data_text: Some("No data to display"),
        },
    },
];

pub const PAGINATION_CARDS: &[DemoCard] = &[DemoCard {
    title: "Paginated grid",
    snippet: indoc! {r#"
        const PAGE_SIZE = 15

        const [page, setPage] = useState(1)
        const pageData = useMemo(
          () => data.slice((page - 1) * PAGE_SIZE, page * PAGE_SIZE),
          [page, data]
        )

        return (
          <>
            <Grid<Market> columns={columns} data={pageData} getRowId={item => item.id} />
            <Pager page={page} pageSize={PAGE_SIZE} total={data.length} onChange={setPage} />
          </>
        )
    "#},
    demo: Demo::Market(MarketView::Paginated {
        page_size: PAGE_SIZE,
    }),
}];

pub const SORTING_CARDS: &[DemoCard] = &[
    DemoCard {
        title: "Sortable grid",
        snippet: indoc! {r#"
            const { columns, sortedColumns, updateColumns } = useColumns<YourDataShape>(/*..*/)

            const sortedData = useMemo<YourDataShape[]>(() => someSortFunc(sortedColumns, data), [sortedColumns, data])

            return (
              <Grid<YourDataShape>
                columns={columns}
                data={sortedData}
                getRowId={item => item.id}
                onColumnsChange={updateColumns}
              />
            )
        "#},
        demo: Demo::Market(MarketView::Sorted),
    },
    DemoCard {
        title: "Client sorting",
        snippet: indoc! {r#"
            const sortedData = useMemo<YourDataShape[]>(() => clientSort(sortedColumns, data), [sortedColumns, data])
        "#},
        demo: Demo::Prose(
            "clientSort applies each sorted column's comparator in order. \
             Use it when the full dataset is already on the client.",
        ),
    },
    DemoCard {
        title: "Number sort comparator",
        snippet: indoc! {r#"
            const { columns, sortedColumns, updateColumns } = useColumns<YourDataShape>(() => [
              {
                // ...
                sortComparator: 'number'
              }
            ])
        "#},
        demo: Demo::Prose(
            "Columns default to the string comparator; declare the number \
             comparator for numeric cells.",
        ),
    },
    DemoCard {
        title: "Server sorting",
        snippet: indoc! {r#"
            useEffect(() => {
              setLoading(true)
              serverSort(sortedColumns)
                .then(setData)
                .finally(() => setLoading(false))
            }, [sortedColumns])
        "#},
        demo: Demo::Prose(
            "For server-side sorting, refetch whenever the sorted columns \
             change and hand the grid the fresh data.",
        ),
    },
];

pub const FILTERING_CARDS: &[DemoCard] = &[
    DemoCard {
        title: "Filterable grid",
        snippet: indoc! {r#"
            // Declare this outside your component (static).
            function TextFilter<T>({ state, setState }: GridFilterProps<T>) {
              return <Input type="text" value={state} onChange={e => setState(e.target.value)} />
            }

            const { columns, filteredColumns, updateColumns } = useColumns<YourDataShape>([
              {
                key: 'desc',
                headerNode: 'Description',
                getValue: item => item.desc,
                filterComponent: TextFilter,
                filterComparator: createStringFilter()
              },
              // ...
            ])

            // Filter the data on the client or server in whatever way suits you.
            const filteredData = useMemo<YourDataShape[]>(() => clientFilter(filteredColumns, data), [
              filteredColumns,
              data,
            ])

            return (
              <Grid<YourDataShape>
                columns={columns}
                data={filteredData}
                getRowId={item => item.id}
                onColumnsChange={updateColumns}
              />
            )
        "#},
        demo: Demo::Market(MarketView::Filtered { quote: "USD" }),
    },
    DemoCard {
        title: "Server filtering",
        snippet: indoc! {r#"
            useEffect(() => {
              setLoading(true)
              serverFilter(filteredColumns)
                .then(setData)
                .finally(() => setLoading(false))
            }, [filteredColumns])
        "#},
        demo: Demo::Prose(
            "As with sorting, server-side filtering refetches whenever the \
             filtered columns change.",
        ),
    },
    DemoCard {
        title: "Custom filter comparator",
        snippet: indoc! {r#"
            function dateFilter(filterValue: Date, cellValue: Date) {
              // Don't filter if the filter date isn't set/valid.
              if (!filterValue instanceof Date || !filterValue.getTime()) {
                return true;
              }

              // Normalize the time (we only care about the calendar date matching)
              filterValue.setHours(0, 0, 0)
              cellValue.setHour(0, 0, 0)

              return filterValue.getTime() === cellValue.getTime()
            }
        "#},
        demo: Demo::Prose(
            "A filter comparator takes the filter state and a cell value and \
             decides whether the row stays visible.",
        ),
    },
];

pub const MASTER_DETAILS_CARDS: &[DemoCard] = &[DemoCard {
    title: "Grid master-details",
    snippet: indoc! {r#"
        function getRowDetails(item: YourDataShape) {
          if (expandState[item.id]) {
            return <div>{item.details}</div>
          }
        }

        return (
          <Grid<YourDataShape>
            columns={columns}
            data={data}
            getRowId={item => item.id}
            getRowDetails={getRowDetails}
          />
        )
    "#},
    demo: Demo::Market(MarketView::MasterDetails),
}];

pub const ROW_CHILDREN_CARDS: &[DemoCard] = &[DemoCard {
    title: "Grid row children",
    snippet: indoc! {r#"
        function getRowChildren(item: YourDataShape) {
          if (expandState[item.id]) {
            return item.children
          }
        }

        return (
          <Grid<YourDataShape>
            columns={columns}
            data={data}
            getRowId={item => item.id}
            getRowChildren={getRowChildren}
          />
        )
    "#},
    demo: Demo::Market(MarketView::RowChildren),
}];
