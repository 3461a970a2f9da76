//! The buttons catalog, one card per emphasis/state variant.

use super::{ButtonSpec, Demo, DemoCard, Emphasis};

const PRIMARY: &[ButtonSpec] = &[ButtonSpec::new("Sign up", Emphasis::Primary)];
const SECONDARY: &[ButtonSpec] = &[ButtonSpec::new("Cancel", Emphasis::Secondary)];
const GHOST: &[ButtonSpec] = &[ButtonSpec::new("Change settings", Emphasis::Ghost)];
const DANGER: &[ButtonSpec] = &[ButtonSpec::new("Delete account", Emphasis::Danger)];
const BUY: &[ButtonSpec] = &[ButtonSpec::new("Buy BTC", Emphasis::Buy)];
const SELL: &[ButtonSpec] = &[ButtonSpec::new("Sell BTC", Emphasis::Sell)];

const GROUP: &[ButtonSpec] = &[
    ButtonSpec {
        disabled: true,
        ..ButtonSpec::new("Spot", Emphasis::Primary)
    },
    ButtonSpec::new("Margin", Emphasis::Secondary),
];

const LEFT_DECORATOR: &[ButtonSpec] = &[ButtonSpec {
    decorator_left: Some("\u{2709}"),
    ..ButtonSpec::new("Subscribe", Emphasis::Primary)
}];

const RIGHT_DECORATOR: &[ButtonSpec] = &[ButtonSpec {
    decorator_right: Some("\u{2398}"),
    ..ButtonSpec::new("Copy text", Emphasis::Secondary)
}];

const DISABLED: &[ButtonSpec] = &[ButtonSpec {
    disabled: true,
    ..ButtonSpec::new("Sign up", Emphasis::Primary)
}];

const LOADING: &[ButtonSpec] = &[ButtonSpec {
    loading: true,
    disabled: true,
    ..ButtonSpec::new("Updating details", Emphasis::Primary)
}];

const COMPACT: &[ButtonSpec] = &[ButtonSpec {
    compact: true,
    ..ButtonSpec::new("Cancel order", Emphasis::Danger)
}];

pub const CARDS: &[DemoCard] = &[
    DemoCard {
        title: "Primary",
        snippet: r#"<Button emphasis="primary">Sign up</Button>"#,
        demo: Demo::Buttons(PRIMARY),
    },
    DemoCard {
        title: "Secondary",
        snippet: r#"<Button emphasis="secondary">Cancel</Button>"#,
        demo: Demo::Buttons(SECONDARY),
    },
    DemoCard {
        title: "Ghost",
        snippet: r#"<Button emphasis="ghost">Change settings</Button>"#,
        demo: Demo::Buttons(GHOST),
    },
    DemoCard {
        title: "Danger",
        snippet: r#"<Button emphasis="danger">Delete account</Button>"#,
        demo: Demo::Buttons(DANGER),
    },
    DemoCard {
        title: "Buy",
        snippet: r#"<Button emphasis="buy">Buy BTC</Button>"#,
        demo: Demo::Buttons(BUY),
    },
    DemoCard {
        title: "Sell",
        snippet: r#"<Button emphasis="sell">Sell BTC</Button>"#,
        demo: Demo::Buttons(SELL),
    },
    DemoCard {
        title: "Group",
        snippet: indoc::indoc! {r#"
            <ButtonGroup>
              <Button emphasis="primary" disabled>
                Spot
              </Button>
              <Button emphasis="secondary">Margin</Button>
            </ButtonGroup>
        "#},
        demo: Demo::Buttons(GROUP),
    },
    DemoCard {
        title: "Left Decorator",
        snippet: indoc::indoc! {r#"
            <Button emphasis="primary" decoratorLeft={<FiMail />}>
              Subscribe
            </Button>
        "#},
        demo: Demo::Buttons(LEFT_DECORATOR),
    },
    DemoCard {
        title: "Right Decorator",
        snippet: indoc::indoc! {r#"
            <Button emphasis="secondary" decoratorRight={<FiCopy />}>
              Copy text
            </Button>
        "#},
        demo: Demo::Buttons(RIGHT_DECORATOR),
    },
    DemoCard {
        title: "Disabled",
        snippet: indoc::indoc! {r#"
            <Button emphasis="primary" disabled>
              Sign up
            </Button>
        "#},
        demo: Demo::Buttons(DISABLED),
    },
    DemoCard {
        title: "Loading",
        snippet: indoc::indoc! {r#"
            <Button emphasis="primary" loading disabled>
              Updating details
            </Button>
        "#},
        demo: Demo::Buttons(LOADING),
    },
    DemoCard {
        title: "Compact",
        snippet: indoc::indoc! {r#"
            <Button emphasis="danger" size="compact">
              Cancel order
            </Button>
        "#},
        demo: Demo::Buttons(COMPACT),
    },
];
