use indoc::indoc;

use super::{Demo, DemoCard};

pub const CARDS: &[DemoCard] = &[
    DemoCard {
        title: "Welcome",
        snippet: indoc! {r#"
            import { Provider, lightTheme, darkTheme } from '@finery/core'

            function MyApp({ Component, pageProps }: AppProps) {
              const { theme } = useSnapshot(globalState)

              return (
                <Provider theme={theme === 'light' ? lightTheme : darkTheme}>
                  <Component {...pageProps} />
                </Provider>
              )
            }
        "#},
        demo: Demo::Prose(
            "Finery is a component library for trading interfaces: buttons, \
             currency icons, and a virtualized data grid. Pick a page from \
             the sidebar to browse live demos; every card can show or copy \
             the source behind it.",
        ),
    },
];
