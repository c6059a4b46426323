use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};

/// Hands back the rendered HTML for one page. The catalog loop only talks to
/// this trait, so tests can swap in canned HTML for the browser.
pub trait PageFetcher {
    fn fetch_rendered(&self, url: &str) -> Result<String>;
}

/// Renders pages in a headless Chrome process.
///
/// A single tab is reused for every page. Dropping the fetcher shuts the
/// browser down, so the process is released even when a fetch aborts the run.
pub struct ChromeFetcher {
    _browser: Browser,
    tab: Arc<Tab>,
    ready_selector: String,
}

impl ChromeFetcher {
    /// Launches Chrome headless with the sandbox off and opens the tab the
    /// whole run will reuse. `ready_selector` is the markup whose presence
    /// means a page has finished rendering.
    pub fn launch(ready_selector: &str) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .build()
            .map_err(|e| anyhow!("chrome launch options: {e}"))?;
        let browser = Browser::new(options).context("launching headless chrome")?;
        let tab = browser.new_tab().context("opening a browser tab")?;
        Ok(Self {
            _browser: browser,
            tab,
            ready_selector: ready_selector.to_string(),
        })
    }
}

impl PageFetcher for ChromeFetcher {
    fn fetch_rendered(&self, url: &str) -> Result<String> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .with_context(|| format!("loading {url}"))?;
        // Rendering has settled once the listing markup exists; a page that
        // never shows it is a failed fetch.
        self.tab
            .wait_for_element(&self.ready_selector)
            .with_context(|| format!("{url} never rendered {:?}", self.ready_selector))?;
        self.tab
            .get_content()
            .with_context(|| format!("reading the source of {url}"))
    }
}
