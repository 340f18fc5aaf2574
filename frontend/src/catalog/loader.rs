use std::rc::Rc;

use futures::future::LocalBoxFuture;
use log::{debug, error, info, warn};
use yew::Callback;

use super::error::CatalogError;
use super::model::{CatalogConfig, ListKind, Service};
use super::source::CatalogSource;

pub const ERROR_PANEL_TITLE: &str = "❌ 加载失败";
pub const RETRY_LABEL: &str = "重新尝试";
pub const LOADING_TEXT: &str = "正在加载服务...";

/// Everything a render target can be told to display.
///
/// A target always shows exactly one of these; each `show` replaces the
/// previous view wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetView {
    Loading,
    Cards { kind: ListKind, services: Vec<Service> },
    Placeholder(&'static str),
    Error(ErrorPanel),
}

impl TargetView {
    pub fn for_list(kind: ListKind, services: &[Service]) -> Self {
        if services.is_empty() {
            TargetView::Placeholder(kind.placeholder_text())
        } else {
            TargetView::Cards {
                kind,
                services: services.to_vec(),
            }
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            TargetView::Cards { services, .. } => services.len(),
            _ => 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TargetView::Placeholder(_))
    }

    pub fn error_panel(&self) -> Option<&ErrorPanel> {
        match self {
            TargetView::Error(panel) => Some(panel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPanel {
    pub message: String,
}

impl ErrorPanel {
    pub fn from_error(err: &CatalogError) -> Self {
        Self {
            message: err.panel_message(),
        }
    }

    pub fn title(&self) -> &'static str {
        ERROR_PANEL_TITLE
    }

    pub fn retry_label(&self) -> &'static str {
        RETRY_LABEL
    }
}

/// A container the loader writes into. Owned by the page.
pub trait RenderTarget {
    fn show(&self, view: TargetView);
}

/// The two handles the loader renders into. Either may be absent.
#[derive(Clone, Default)]
pub struct CatalogTargets {
    free: Option<Rc<dyn RenderTarget>>,
    recommended: Option<Rc<dyn RenderTarget>>,
}

impl CatalogTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ListKind, target: Rc<dyn RenderTarget>) -> Self {
        match kind {
            ListKind::Free => self.free = Some(target),
            ListKind::Recommended => self.recommended = Some(target),
        }
        self
    }

    pub fn get(&self, kind: ListKind) -> Option<&Rc<dyn RenderTarget>> {
        match kind {
            ListKind::Free => self.free.as_ref(),
            ListKind::Recommended => self.recommended.as_ref(),
        }
    }
}

/// Runs a detached future on the local executor.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

fn browser_spawner() -> Spawner {
    Rc::new(|fut: LocalBoxFuture<'static, ()>| {
        wasm_bindgen_futures::spawn_local(fut)
    })
}

/// Maps the outcome of fetch-and-validate to the view of each target.
///
/// Success renders each list independently. Any error puts the same panel
/// on both targets, so a partial catalog never sits next to an error.
pub fn plan(outcome: &Result<CatalogConfig, CatalogError>) -> [(ListKind, TargetView); 2] {
    ListKind::ALL.map(|kind| {
        let view = match outcome {
            Ok(config) => TargetView::for_list(kind, config.data.list(kind)),
            Err(err) => TargetView::Error(ErrorPanel::from_error(err)),
        };
        (kind, view)
    })
}

/// Loads the catalog from a source and renders it into the targets.
///
/// Cloning is cheap; clones share the source and the targets.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Rc<dyn CatalogSource>,
    targets: CatalogTargets,
    spawner: Spawner,
}

impl CatalogLoader {
    pub fn new(source: Rc<dyn CatalogSource>, targets: CatalogTargets) -> Self {
        Self {
            source,
            targets,
            spawner: browser_spawner(),
        }
    }

    pub fn with_spawner(mut self, spawner: Spawner) -> Self {
        self.spawner = spawner;
        self
    }

    /// Fetches, validates and renders. Never fails: errors end up on screen.
    ///
    /// Overlapping calls are not serialized; whichever finishes last owns
    /// the targets.
    pub async fn load(&self) {
        info!("开始加载MCP服务目录");
        let outcome = self.fetch_config().await;

        match &outcome {
            Ok(config) => info!(
                "目录版本 {}: {} 个免费服务, {} 个推荐服务",
                config.header.version,
                config.data.free_list.len(),
                config.data.recommended_list.len()
            ),
            Err(CatalogError::Shape) => warn!("配置数据无效, 缺少 data 字段"),
            Err(err) => error!("加载MCP服务失败: {}", err),
        }

        for (kind, view) in plan(&outcome) {
            self.show(kind, view);
        }
    }

    async fn fetch_config(&self) -> Result<CatalogConfig, CatalogError> {
        self.source.fetch_catalog().await?.validate()
    }

    fn show(&self, kind: ListKind, view: TargetView) {
        match self.targets.get(kind) {
            Some(target) => {
                debug!("rendering {} list into #{}", kind.label(), kind.target_id());
                target.show(view);
            }
            None => warn!("找不到服务容器 #{}, 跳过渲染", kind.target_id()),
        }
    }

    /// Fire-and-forget variant of [`load`](Self::load).
    pub fn spawn_load(&self) {
        let this = self.clone();
        (self.spawner)(Box::pin(async move { this.load().await }));
    }

    /// Callback for the error panel's retry control.
    pub fn retry_callback(&self) -> Callback<()> {
        let this = self.clone();
        Callback::from(move |_| {
            info!("重新加载MCP服务目录");
            this.spawn_load();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::CatalogDocument;
    use crate::catalog::source::JsonCatalogSource;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryTarget {
        views: RefCell<Vec<TargetView>>,
    }

    impl MemoryTarget {
        fn current(&self) -> TargetView {
            self.views
                .borrow()
                .last()
                .cloned()
                .expect("target was never rendered")
        }

        fn renders(&self) -> usize {
            self.views.borrow().len()
        }
    }

    impl RenderTarget for MemoryTarget {
        fn show(&self, view: TargetView) {
            self.views.borrow_mut().push(view);
        }
    }

    struct CountingSource {
        inner: JsonCatalogSource,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl CatalogSource for CountingSource {
        async fn fetch_catalog(&self) -> Result<CatalogDocument, CatalogError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.fetch_catalog().await
        }
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl CatalogSource for FailingSource {
        async fn fetch_catalog(&self) -> Result<CatalogDocument, CatalogError> {
            Err(CatalogError::Fetch("network unreachable".into()))
        }
    }

    type Queue = Rc<RefCell<Vec<LocalBoxFuture<'static, ()>>>>;

    fn queued_spawner() -> (Spawner, Queue) {
        let queue: Queue = Rc::default();
        let pending = queue.clone();
        let spawner: Spawner = Rc::new(move |fut: LocalBoxFuture<'static, ()>| {
            pending.borrow_mut().push(fut)
        });
        (spawner, queue)
    }

    fn run_pending(queue: &Queue) {
        let tasks: Vec<_> = queue.borrow_mut().drain(..).collect();
        for task in tasks {
            block_on(task);
        }
    }

    struct Fixture {
        loader: CatalogLoader,
        free: Rc<MemoryTarget>,
        recommended: Rc<MemoryTarget>,
        queue: Queue,
    }

    fn fixture(source: Rc<dyn CatalogSource>) -> Fixture {
        let free = Rc::new(MemoryTarget::default());
        let recommended = Rc::new(MemoryTarget::default());
        let targets = CatalogTargets::new()
            .with(ListKind::Free, free.clone())
            .with(ListKind::Recommended, recommended.clone());
        let (spawner, queue) = queued_spawner();
        let loader = CatalogLoader::new(source, targets).with_spawner(spawner);
        Fixture {
            loader,
            free,
            recommended,
            queue,
        }
    }

    fn json_fixture(value: serde_json::Value) -> Fixture {
        fixture(Rc::new(JsonCatalogSource::from_value(value)))
    }

    fn service(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": id.to_uppercase(),
            "description": "d",
            "category": "c",
            "endpoint": "e"
        })
    }

    #[test]
    fn single_free_service_and_empty_recommended() {
        let f = json_fixture(json!({
            "header": { "version": "1" },
            "data": {
                "active": { "showFree": true },
                "freeList": [
                    { "id": "a", "name": "A", "description": "d", "category": "c", "endpoint": "e" }
                ],
                "recommendedList": []
            }
        }));
        block_on(f.loader.load());

        match f.free.current() {
            TargetView::Cards { kind, services } => {
                assert_eq!(kind, ListKind::Free);
                assert_eq!(kind.badge_class(), "free-service-badge");
                assert_eq!(services.len(), 1);
                assert_eq!(services[0].name, "A");
            }
            other => panic!("expected cards, got {:?}", other),
        }

        let recommended = f.recommended.current();
        assert!(recommended.is_placeholder());
        assert_eq!(recommended.card_count(), 0);
        assert_eq!(recommended, TargetView::Placeholder("暂无推荐服务"));
    }

    #[test]
    fn absent_free_list_shows_one_placeholder() {
        let f = json_fixture(json!({
            "data": { "recommendedList": [service("x")] }
        }));
        block_on(f.loader.load());

        assert_eq!(f.free.current(), TargetView::Placeholder("暂无免费服务"));
        assert_eq!(f.free.current().card_count(), 0);
        assert_eq!(f.recommended.current().card_count(), 1);
    }

    #[test]
    fn card_count_matches_list_length_in_order() {
        let free: Vec<_> = (0..12).map(|i| service(&format!("f{}", i))).collect();
        let recommended: Vec<_> = (0..7).map(|i| service(&format!("r{}", i))).collect();
        let f = json_fixture(json!({
            "data": { "freeList": free, "recommendedList": recommended }
        }));
        block_on(f.loader.load());

        let ids = |view: TargetView| match view {
            TargetView::Cards { services, .. } => {
                services.into_iter().map(|s| s.id).collect::<Vec<_>>()
            }
            other => panic!("expected cards, got {:?}", other),
        };

        let free_ids = ids(f.free.current());
        let rec_ids = ids(f.recommended.current());
        assert_eq!(free_ids.len(), 12);
        assert_eq!(rec_ids.len(), 7);
        assert_eq!(free_ids[0], "f0");
        assert_eq!(free_ids[11], "f11");
        assert_eq!(rec_ids, (0..7).map(|i| format!("r{}", i)).collect::<Vec<_>>());
    }

    #[test]
    fn bundled_catalog_renders_both_lists() {
        let f = fixture(Rc::new(JsonCatalogSource::bundled()));
        block_on(f.loader.load());

        assert_eq!(f.free.current().card_count(), 12);
        assert_eq!(f.recommended.current().card_count(), 7);
        assert!(!f.free.current().is_placeholder());
        assert!(!f.recommended.current().is_placeholder());
    }

    #[test]
    fn missing_data_puts_error_panel_on_both_targets() {
        let f = json_fixture(json!({ "header": { "version": "1" } }));
        block_on(f.loader.load());

        for target in [&f.free, &f.recommended] {
            let view = target.current();
            assert_eq!(view.card_count(), 0);
            let panel = view.error_panel().expect("error panel");
            assert!(panel.message.contains("配置数据格式错误"));
            assert_eq!(panel.title(), ERROR_PANEL_TITLE);
            assert_eq!(panel.retry_label(), "重新尝试");
        }
        assert_eq!(f.free.current(), f.recommended.current());
    }

    #[test]
    fn retry_reinvokes_load() {
        let source = Rc::new(CountingSource {
            inner: JsonCatalogSource::from_value(json!({ "header": {} })),
            calls: Cell::new(0),
        });
        let f = fixture(source.clone());
        block_on(f.loader.load());
        assert_eq!(source.calls.get(), 1);
        assert!(f.free.current().error_panel().is_some());

        f.loader.retry_callback().emit(());
        assert_eq!(source.calls.get(), 1, "retry only schedules the load");
        run_pending(&f.queue);

        assert_eq!(source.calls.get(), 2);
        assert_eq!(f.free.renders(), 2);
        assert_eq!(f.recommended.renders(), 2);
    }

    #[test]
    fn fetch_failure_is_reported_with_message() {
        let f = fixture(Rc::new(FailingSource));
        block_on(f.loader.load());

        let view = f.recommended.current();
        let panel = view.error_panel().expect("error panel");
        assert!(panel.message.starts_with("加载MCP服务失败"));
        assert!(panel.message.contains("network unreachable"));
        assert_eq!(f.free.current(), view);
    }

    #[test]
    fn undecodable_catalog_is_unexpected_error() {
        let f = fixture(Rc::new(JsonCatalogSource::from_json("[1, 2")));
        block_on(f.loader.load());

        let panel = f.free.current().error_panel().cloned().expect("error panel");
        assert!(panel.message.starts_with("加载MCP服务失败: catalog decode error"));
    }

    #[test]
    fn loading_twice_matches_loading_once() {
        let once = fixture(Rc::new(JsonCatalogSource::bundled()));
        block_on(once.loader.load());

        let twice = fixture(Rc::new(JsonCatalogSource::bundled()));
        block_on(twice.loader.load());
        block_on(twice.loader.load());

        assert_eq!(once.free.current(), twice.free.current());
        assert_eq!(once.recommended.current(), twice.recommended.current());
        assert_eq!(twice.free.current().card_count(), 12);
    }

    #[test]
    fn missing_target_is_skipped() {
        let free = Rc::new(MemoryTarget::default());
        let targets = CatalogTargets::new().with(ListKind::Free, free.clone());
        let loader = CatalogLoader::new(Rc::new(JsonCatalogSource::bundled()), targets);

        block_on(loader.load());

        assert_eq!(free.current().card_count(), 12);
    }

    #[test]
    fn spawn_load_goes_through_spawner() {
        let f = fixture(Rc::new(JsonCatalogSource::bundled()));
        f.loader.spawn_load();
        assert_eq!(f.free.renders(), 0);

        run_pending(&f.queue);
        assert_eq!(f.free.renders(), 1);
        assert_eq!(f.recommended.current().card_count(), 7);
    }

    #[test]
    fn plan_ignores_show_free_flag() {
        let config = JsonCatalogSource::from_value(json!({
            "data": { "active": { "showFree": false }, "freeList": [service("a")] }
        }));
        let outcome = block_on(config.fetch_catalog()).and_then(CatalogDocument::validate);
        let [(free_kind, free_view), (rec_kind, rec_view)] = plan(&outcome);

        assert_eq!(free_kind, ListKind::Free);
        assert_eq!(free_view.card_count(), 1);
        assert_eq!(rec_kind, ListKind::Recommended);
        assert!(rec_view.is_placeholder());
    }
}
