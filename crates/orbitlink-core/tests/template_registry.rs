//! Shared fragment cache behaviour seen from widget instances.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::noop_waker;
use orbitlink_core::widgets::{MountState, TemplateWidget, WidgetKind};
use orbitlink_core::{FetchError, TemplateFetcher, TemplateRegistry};
use url::Url;

const MODAL: &str = "<div class=\"backdrop\"></div><div class=\"dialog\"><button class=\"close\"></button><slot></slot></div>";

/// Fetcher whose responses are released by the test.
#[derive(Default)]
struct GatedFetcher {
    calls: Cell<usize>,
    gates: RefCell<Vec<oneshot::Sender<Result<String, FetchError>>>>,
}

impl GatedFetcher {
    fn release(&self, result: Result<String, FetchError>) {
        let gate = self.gates.borrow_mut().remove(0);
        let _ = gate.send(result);
    }
}

impl TemplateFetcher for GatedFetcher {
    fn fetch(&self, _url: &str) -> LocalBoxFuture<'static, Result<String, FetchError>> {
        self.calls.set(self.calls.get() + 1);
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push(tx);
        async move {
            rx.await
                .unwrap_or_else(|_| Err(FetchError::Transport("cancelled".into())))
        }
        .boxed_local()
    }
}

struct FailingFetcher;

impl TemplateFetcher for FailingFetcher {
    fn fetch(&self, _url: &str) -> LocalBoxFuture<'static, Result<String, FetchError>> {
        async { Err(FetchError::Transport("network unreachable".into())) }.boxed_local()
    }
}

fn base() -> Url {
    Url::parse("https://site.test/").unwrap()
}

#[tokio::test]
async fn concurrent_widgets_share_one_fetch() {
    let fetcher = Rc::new(GatedFetcher::default());
    let registry = TemplateRegistry::new(fetcher.clone());
    let mut first = TemplateWidget::new(WidgetKind::Modal);
    let mut second = TemplateWidget::new(WidgetKind::Modal);
    let base = base();

    let both = async {
        futures::join!(
            first.attach(&registry, &base, None, "elements/modal.html"),
            second.attach(&registry, &base, None, "elements/modal.html"),
        );
    };
    let release = async {
        tokio::task::yield_now().await;
        fetcher.release(Ok(MODAL.to_string()));
    };
    futures::join!(both, release);

    assert_eq!(fetcher.calls.get(), 1);
    let markup = |widget: &TemplateWidget| match widget.state() {
        MountState::Ready { markup, .. } => markup.clone(),
        other => panic!("unexpected state {:?}", other),
    };
    assert!(Arc::ptr_eq(&markup(&first), &markup(&second)));
    assert!(first.is_operational());
    assert!(second.has_hook(".close"));
}

#[tokio::test]
async fn later_widget_hits_cache() {
    let fetcher = Rc::new(GatedFetcher::default());
    let registry = TemplateRegistry::new(fetcher.clone());
    let url = base().join("elements/modal.html").unwrap();

    let load = registry.load(&url);
    let release = async {
        tokio::task::yield_now().await;
        fetcher.release(Ok(MODAL.to_string()));
    };
    let (loaded, _) = futures::join!(load, release);
    loaded.unwrap();

    let mut widget = TemplateWidget::new(WidgetKind::Modal);
    widget.begin_attach(&base(), Some("elements/modal.html"), "unused.html");
    assert!(widget.finish_from_cache(&registry));
    assert!(widget.is_operational());
    assert_eq!(fetcher.calls.get(), 1);
}

#[tokio::test]
async fn transport_failure_renders_inline_error() {
    let _ = tracing_subscriber::fmt::try_init();
    let registry = TemplateRegistry::new(Rc::new(FailingFetcher));
    let mut widget = TemplateWidget::new(WidgetKind::PlanetInfo);

    let state = widget
        .attach(&registry, &base(), None, "elements/planetInfo.html")
        .await;
    assert!(matches!(state, MountState::Failed { .. }));

    let markup = widget.shadow_markup().unwrap();
    assert!(markup.contains("network unreachable"));
    assert!(markup.contains("https://site.test/elements/planetInfo.html"));
    assert!(registry.is_empty());
}

#[tokio::test]
async fn failed_fetch_is_retried_by_next_instance() {
    let _ = tracing_subscriber::fmt::try_init();
    let fetcher = Rc::new(GatedFetcher::default());
    let registry = TemplateRegistry::new(fetcher.clone());
    let url = base().join("elements/patreonBanner.html").unwrap();

    let release = async {
        tokio::task::yield_now().await;
        fetcher.release(Err(FetchError::Status(503)));
    };
    let (first, _) = futures::join!(registry.load(&url), release);
    assert_eq!(first.unwrap_err(), FetchError::Status(503));

    let release = async {
        tokio::task::yield_now().await;
        fetcher.release(Ok("<a id=\"patreon_banner_button\"></a>".into()));
    };
    let (second, _) = futures::join!(registry.load(&url), release);
    assert!(second.is_ok());
    assert_eq!(fetcher.calls.get(), 2);
    assert_eq!(registry.len(), 1);
}

#[test]
fn late_failure_keeps_newer_retry_in_flight() {
    let _ = tracing_subscriber::fmt::try_init();
    let fetcher = Rc::new(GatedFetcher::default());
    let registry = TemplateRegistry::new(fetcher.clone());
    let url = base().join("elements/planetBubble.html").unwrap();
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    // Two waiters on the first fetch
    let mut early = registry.load(&url).boxed_local();
    let mut late = registry.load(&url).boxed_local();
    assert!(early.poll_unpin(&mut cx).is_pending());
    assert!(late.poll_unpin(&mut cx).is_pending());
    assert_eq!(fetcher.calls.get(), 1);

    fetcher.release(Err(FetchError::Status(503)));
    assert!(matches!(early.poll_unpin(&mut cx), Poll::Ready(Err(FetchError::Status(503)))));

    // A new instance retries before the second waiter observes the failure
    let mut retry = registry.load(&url).boxed_local();
    assert!(retry.poll_unpin(&mut cx).is_pending());
    assert_eq!(fetcher.calls.get(), 2);

    assert!(matches!(late.poll_unpin(&mut cx), Poll::Ready(Err(FetchError::Status(503)))));

    // The retry still owns the slot, so this joins it
    let mut joiner = registry.load(&url).boxed_local();
    assert!(joiner.poll_unpin(&mut cx).is_pending());
    assert_eq!(fetcher.calls.get(), 2);

    fetcher.release(Ok("<div class=\"bubble\"></div>".into()));
    let retried = match retry.poll_unpin(&mut cx) {
        Poll::Ready(result) => result.unwrap(),
        Poll::Pending => panic!("retry still pending"),
    };
    let joined = match joiner.poll_unpin(&mut cx) {
        Poll::Ready(result) => result.unwrap(),
        Poll::Pending => panic!("joined load still pending"),
    };
    assert!(Arc::ptr_eq(&retried, &joined));
    assert_eq!(registry.len(), 1);
}
