use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};

use super::dashboard_constants::RECONNECT_SETTLE_SECS;
use super::dashboard_model::{Command, StatusSeverity};
use super::dashboard_traits::PresentationSink;
use crate::app_state::AppState;
use crate::errors::Result;
use crate::filters::{CoinCategory, FilterEngine, FilterRule};
use crate::market_data::{Coin, Connectivity, MarketDataService, Provenance};
use crate::portfolio::{PortfolioService, PortfolioSnapshot};
use crate::scheduler::{RefreshScheduler, SchedulerHooks};
use crate::settings::AppSettings;
use crate::translation::{TranslationLoader, TranslationService};

/// Owns the [`AppState`] and every component around it. All mutation
/// funnels through [`dispatch`](Self::dispatch) or scheduler callbacks,
/// each of which runs to completion before the next begins.
pub struct DashboardService {
    state: Mutex<AppState>,
    translator: Mutex<TranslationService>,
    translation_loader: Option<TranslationLoader>,
    market_data: MarketDataService,
    scheduler: RefreshScheduler,
    sink: Arc<dyn PresentationSink>,
    /// Monotonic generation counter; an acquisition result is discarded
    /// unless its token is still the latest issued ("last request wins").
    next_generation: AtomicU64,
    me: Weak<DashboardService>,
}

impl DashboardService {
    pub fn new(settings: AppSettings, sink: Arc<dyn PresentationSink>) -> Arc<Self> {
        let market_data = MarketDataService::from_settings(&settings);
        let translator = TranslationService::new(&settings);
        let loader = TranslationLoader::new(&settings);
        Self::assemble(settings, market_data, translator, Some(loader), sink)
    }

    /// Wire up with injected collaborators; callers that do not serve
    /// a `languages.json` pass no loader.
    pub fn with_components(
        settings: AppSettings,
        market_data: MarketDataService,
        translator: TranslationService,
        sink: Arc<dyn PresentationSink>,
    ) -> Arc<Self> {
        Self::assemble(settings, market_data, translator, None, sink)
    }

    fn assemble(
        settings: AppSettings,
        market_data: MarketDataService,
        translator: TranslationService,
        translation_loader: Option<TranslationLoader>,
        sink: Arc<dyn PresentationSink>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|me: &Weak<DashboardService>| {
            let hooks: Weak<dyn SchedulerHooks> = me.clone();
            DashboardService {
                state: Mutex::new(AppState::new(&settings)),
                translator: Mutex::new(translator),
                translation_loader,
                market_data,
                scheduler: RefreshScheduler::new(hooks),
                sink,
                next_generation: AtomicU64::new(0),
                me: me.clone(),
            }
        })
    }

    /// Load translations (recovering to the embedded table on failure),
    /// then run the first acquisition cycle.
    pub async fn init(&self) {
        if let Some(loader) = &self.translation_loader {
            match loader.load().await {
                Ok(tables) => {
                    info!("language tables loaded");
                    self.translator.lock().unwrap().install_tables(tables);
                }
                Err(err) => {
                    warn!("failed to load language tables, using embedded defaults: {err}");
                    self.sink.render_status(
                        &self.translate("translations_error"),
                        StatusSeverity::Warning,
                    );
                }
            }
        }
        self.refresh().await;
    }

    pub async fn dispatch(&self, command: Command) {
        match command {
            Command::Refresh => self.refresh().await,
            Command::Search(query) => self.apply_search(query),
            Command::SetCategory(category) => self.apply_category(category),
            Command::SelectCoin(id) => {
                self.state.lock().unwrap().selected_coin = Some(id);
            }
            Command::Dismiss => {
                self.state.lock().unwrap().selected_coin = None;
            }
            Command::Trade(id) => self.acknowledge_trade(&id),
            Command::ToggleSound => self.toggle_sound(),
            Command::SetLanguage(code) => self.set_language(&code),
            Command::ConnectivityChanged(online) => self.connectivity_changed(online),
        }
    }

    /// One full acquisition cycle. Never panics past this boundary;
    /// terminal failures surface through the sink only.
    pub async fn refresh(&self) {
        let token = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let connectivity = self.state.lock().unwrap().connectivity;

        let loading_key = match connectivity {
            Connectivity::Online => "loading",
            Connectivity::Offline => "loading_local",
        };
        self.sink
            .render_status(&self.translate(loading_key), StatusSeverity::Info);

        match self.acquire_and_apply(token, connectivity).await {
            Ok(Some(provenance)) => self.scheduler.transition(provenance),
            Ok(None) => {}
            Err(err) => {
                error!("acquisition cycle {token} failed: {err}");
                if self.is_latest(token) {
                    self.sink.render_fatal_error(&self.translate("error"));
                }
            }
        }
    }

    /// Acquire, guard against superseded responses, replace the
    /// repository and recompute the derived views. `Ok(None)` means the
    /// result was discarded because a newer cycle was issued meanwhile.
    async fn acquire_and_apply(
        &self,
        token: u64,
        connectivity: Connectivity,
    ) -> Result<Option<Provenance>> {
        let (coins, provenance) = self.market_data.acquire(connectivity).await?;

        // The supersession check and the apply must share the state
        // lock: checked outside it, a stale cycle could pass, be
        // preempted, and clobber a newer cycle's data. Tokens are
        // issued before any apply, so a passing check here means no
        // newer cycle exists and the replace below cannot regress the
        // repository's generation either.
        let (displayed, snapshot) = {
            let mut state = self.state.lock().unwrap();
            if !self.is_latest(token) || !state.repository.replace(coins, token) {
                debug!("discarding superseded acquisition (token {token})");
                return Ok(None);
            }
            state.provenance = Some(provenance);
            state.portfolio =
                PortfolioService::recompute(state.repository.coins(), &state.portfolio);
            (state.repository.filtered().to_vec(), state.portfolio.clone())
        };

        self.render_view(&displayed);
        self.sink.render_portfolio(&snapshot);
        self.render_provenance_banner(provenance, connectivity);
        Ok(Some(provenance))
    }

    fn is_latest(&self, token: u64) -> bool {
        token == self.next_generation.load(Ordering::SeqCst)
    }

    fn render_view(&self, displayed: &[Coin]) {
        if displayed.is_empty() {
            self.sink.render_empty();
        } else {
            self.sink.render_coins(displayed);
        }
    }

    fn render_provenance_banner(&self, provenance: Provenance, connectivity: Connectivity) {
        match (provenance, connectivity) {
            (Provenance::Remote, _) => self
                .sink
                .render_status(&self.translate("online_mode"), StatusSeverity::Success),
            (Provenance::Local, Connectivity::Offline) => self
                .sink
                .render_status(&self.translate("offline_mode"), StatusSeverity::Warning),
            // Degraded: online but serving the local snapshot.
            (Provenance::Local, Connectivity::Online) => self
                .sink
                .render_status(&self.translate("api_error"), StatusSeverity::Warning),
        }
    }

    /// Text search recomputes from the full canonical list using only
    /// the query; any active category selection is deliberately not
    /// combined with it (observed behavior, kept as-is).
    fn apply_search(&self, query: String) {
        let displayed = {
            let mut state = self.state.lock().unwrap();
            state.filter.query = query.clone();
            let filtered =
                FilterEngine::apply(state.repository.coins(), &FilterRule::Search(query));
            state.repository.set_filtered(filtered);
            state.repository.filtered().to_vec()
        };
        self.render_view(&displayed);
    }

    /// Category selection; like search, it discards the other criterion.
    fn apply_category(&self, category: CoinCategory) {
        let displayed = {
            let mut state = self.state.lock().unwrap();
            state.filter.category = category;
            let filtered =
                FilterEngine::apply(state.repository.coins(), &FilterRule::Category(category));
            state.repository.set_filtered(filtered);
            state.repository.filtered().to_vec()
        };
        self.render_view(&displayed);
    }

    fn acknowledge_trade(&self, id: &str) {
        let name = {
            let state = self.state.lock().unwrap();
            state
                .repository
                .coins()
                .iter()
                .find(|coin| coin.id == id)
                .map(|coin| coin.name.clone())
        };
        match name {
            Some(name) => {
                let message = format!("{} {}", self.translate("trade"), name);
                self.sink.render_status(&message, StatusSeverity::Info);
            }
            None => debug!("trade requested for unknown coin {id}"),
        }
    }

    fn toggle_sound(&self) {
        let enabled = {
            let mut state = self.state.lock().unwrap();
            state.sound_enabled = !state.sound_enabled;
            state.sound_enabled
        };
        self.sink.render_sound_label(enabled);
    }

    fn set_language(&self, code: &str) {
        self.translator.lock().unwrap().set_language(code);
        let (loaded, displayed, snapshot) = {
            let state = self.state.lock().unwrap();
            (
                !state.repository.coins().is_empty(),
                state.repository.filtered().to_vec(),
                state.portfolio.clone(),
            )
        };
        // Re-render existing data so localized text follows the switch.
        if loaded {
            self.render_view(&displayed);
            self.sink.render_portfolio(&snapshot);
        }
    }

    fn connectivity_changed(&self, online: bool) {
        let connectivity = Connectivity::from(online);
        let provenance = {
            let mut state = self.state.lock().unwrap();
            state.connectivity = connectivity;
            state.provenance
        };

        match connectivity {
            Connectivity::Online => {
                self.sink
                    .render_status(&self.translate("online_mode"), StatusSeverity::Success);
                // Serving stale local data: re-acquire once after the
                // signal settles.
                if provenance == Some(Provenance::Local) {
                    if let Some(service) = self.me.upgrade() {
                        tokio::spawn(async move {
                            tokio::time::sleep(Duration::from_secs(RECONNECT_SETTLE_SECS)).await;
                            service.refresh().await;
                        });
                    }
                }
            }
            Connectivity::Offline => {
                self.sink
                    .render_status(&self.translate("offline_mode"), StatusSeverity::Warning);
            }
        }
    }

    fn translate(&self, key: &str) -> String {
        self.translator.lock().unwrap().translate(key)
    }

    // Read accessors for hosts and tests.

    pub fn coins(&self) -> Vec<Coin> {
        self.state.lock().unwrap().repository.coins().to_vec()
    }

    pub fn displayed(&self) -> Vec<Coin> {
        self.state.lock().unwrap().repository.filtered().to_vec()
    }

    pub fn portfolio(&self) -> PortfolioSnapshot {
        self.state.lock().unwrap().portfolio.clone()
    }

    pub fn provenance(&self) -> Option<Provenance> {
        self.state.lock().unwrap().provenance
    }

    pub fn generation(&self) -> u64 {
        self.state.lock().unwrap().repository.generation()
    }

    pub fn selected_coin(&self) -> Option<String> {
        self.state.lock().unwrap().selected_coin.clone()
    }

    pub fn scheduler_state(&self) -> crate::scheduler::RefreshState {
        self.scheduler.state()
    }
}

#[async_trait]
impl SchedulerHooks for DashboardService {
    fn connectivity(&self) -> Connectivity {
        self.state.lock().unwrap().connectivity
    }

    fn displayed_coin_ids(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .repository
            .filtered()
            .iter()
            .map(|coin| coin.id.clone())
            .collect()
    }

    async fn scheduled_refresh(&self) {
        self.refresh().await;
    }

    fn pulse(&self, coin_ids: &[String]) {
        self.sink.render_pulse(coin_ids);
    }
}
