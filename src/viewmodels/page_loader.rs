// ============================================================================
// PAGE LOADER - Máquina de estados de carga de una página
// ============================================================================
// idle → loading → loaded | error. Todo o nada: el future de la página ya
// junta sus requests (try_join), así que un solo fallo deja la página en error
// sin datos parciales. Un 401 no es error de página: lo resuelve el
// interceptor global y aquí solo se vuelve a idle.
// Cancelación: AbortHandle + contador de generación. Una respuesta que llega
// después de cancel() o de un nuevo run() se descarta.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};

use crate::services::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Idle,
    Loading,
    Error(String),
    Loaded,
}

/// Lo que la vista debe pintar
#[derive(Debug, Clone, PartialEq)]
pub enum PageView<T> {
    Idle,
    Loading,
    Error(String),
    /// Cargado, pero sin resultados (no es un error)
    Empty,
    Populated(T),
}

/// Resultado de un `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
    Unauthorized,
    /// Cancelado o reemplazado por otra carga: no se tocó el estado
    Cancelled,
}

struct LoaderInner<T> {
    status: PageStatus,
    data: Option<T>,
    generation: u64,
    abort: Option<AbortHandle>,
}

#[derive(Clone)]
pub struct PageLoader<T> {
    inner: Rc<RefCell<LoaderInner<T>>>,
    error_message: &'static str,
}

impl<T: Clone> PageLoader<T> {
    pub fn new(error_message: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LoaderInner {
                status: PageStatus::Idle,
                data: None,
                generation: 0,
                abort: None,
            })),
            error_message,
        }
    }

    /// Entra en loading y espera el future de la página.
    /// Sirve tanto para el montaje como para el botón de reintento.
    pub async fn run<F>(&self, fetch: F) -> LoadOutcome
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if let Some(previous) = inner.abort.take() {
                previous.abort();
            }
            inner.generation += 1;
            inner.status = PageStatus::Loading;
            inner.abort = Some(handle);
            inner.generation
        };

        let result = Abortable::new(fetch, registration).await;

        let mut inner = self.inner.borrow_mut();
        if inner.generation != generation {
            return LoadOutcome::Cancelled;
        }
        inner.abort = None;

        match result {
            Err(_aborted) => LoadOutcome::Cancelled,
            Ok(Ok(data)) => {
                inner.data = Some(data);
                inner.status = PageStatus::Loaded;
                LoadOutcome::Loaded
            }
            Ok(Err(ApiError::Unauthorized(_))) => {
                inner.data = None;
                inner.status = PageStatus::Idle;
                LoadOutcome::Unauthorized
            }
            Ok(Err(e)) => {
                log::error!("❌ Error cargando página: {}", e);
                inner.data = None;
                inner.status = PageStatus::Error(self.error_message.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// Desmontaje / navegación: la carga en vuelo ya no puede tocar el estado
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(handle) = inner.abort.take() {
            handle.abort();
        }
        inner.generation += 1;
        if inner.status == PageStatus::Loading {
            inner.status = PageStatus::Idle;
        }
    }

    pub fn status(&self) -> PageStatus {
        self.inner.borrow().status.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.borrow().status == PageStatus::Loading
    }

    pub fn data(&self) -> Option<T> {
        self.inner.borrow().data.clone()
    }

    /// Modifica los datos cargados (ej. reemplazar una reserva tras confirmarla)
    pub fn update_data<F>(&self, update: F)
    where
        F: FnOnce(&mut T),
    {
        if let Some(data) = self.inner.borrow_mut().data.as_mut() {
            update(data);
        }
    }

    pub fn view<P>(&self, is_empty: P) -> PageView<T>
    where
        P: Fn(&T) -> bool,
    {
        let inner = self.inner.borrow();
        match (&inner.status, &inner.data) {
            (PageStatus::Idle, _) => PageView::Idle,
            (PageStatus::Loading, _) => PageView::Loading,
            (PageStatus::Error(message), _) => PageView::Error(message.clone()),
            (PageStatus::Loaded, Some(data)) if !is_empty(data) => PageView::Populated(data.clone()),
            (PageStatus::Loaded, _) => PageView::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::future::{try_join, ready};
    use futures::task::LocalSpawnExt;

    const MESSAGE: &str = "Failed to load. Please try again.";

    fn status_error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn starts_idle_and_loads() {
        let loader: PageLoader<Vec<i32>> = PageLoader::new(MESSAGE);
        assert_eq!(loader.status(), PageStatus::Idle);
        assert_eq!(loader.view(Vec::is_empty), PageView::Idle);

        let outcome = block_on(loader.run(ready(Ok(vec![1, 2]))));
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(loader.status(), PageStatus::Loaded);
        assert_eq!(loader.view(Vec::is_empty), PageView::Populated(vec![1, 2]));
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let loader: PageLoader<Vec<i32>> = PageLoader::new(MESSAGE);
        block_on(loader.run(ready(Ok(Vec::new()))));
        assert_eq!(loader.status(), PageStatus::Loaded);
        assert_eq!(loader.view(Vec::is_empty), PageView::Empty);
    }

    #[test]
    fn one_failed_request_in_fan_out_means_error_without_partial_data() {
        let loader: PageLoader<(Vec<i32>, String)> = PageLoader::new(MESSAGE);
        let fan_out = try_join(
            ready(Ok::<_, ApiError>(vec![1, 2, 3])),
            ready(Err::<String, _>(status_error())),
        );

        let outcome = block_on(loader.run(fan_out));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(loader.status(), PageStatus::Error(MESSAGE.to_string()));
        assert_eq!(loader.data(), None);
        assert_eq!(loader.view(|_| false), PageView::Error(MESSAGE.to_string()));
    }

    #[test]
    fn retry_after_error_reaches_loaded() {
        let loader: PageLoader<Vec<i32>> = PageLoader::new(MESSAGE);
        block_on(loader.run(ready(Err(status_error()))));
        assert!(matches!(loader.status(), PageStatus::Error(_)));

        let outcome = block_on(loader.run(ready(Ok(vec![7]))));
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(loader.data(), Some(vec![7]));
    }

    #[test]
    fn unauthorized_returns_to_idle() {
        let loader: PageLoader<Vec<i32>> = PageLoader::new(MESSAGE);
        let outcome = block_on(loader.run(ready(Err(ApiError::Unauthorized("Invalid token.".into())))));
        assert_eq!(outcome, LoadOutcome::Unauthorized);
        assert_eq!(loader.status(), PageStatus::Idle);
    }

    #[test]
    fn cancelled_load_never_touches_state() {
        let loader: PageLoader<Vec<i32>> = PageLoader::new(MESSAGE);
        let (sender, receiver) = oneshot::channel::<Vec<i32>>();
        let outcome = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        {
            let loader = loader.clone();
            let outcome = outcome.clone();
            pool.spawner()
                .spawn_local(async move {
                    let fetch = async move {
                        receiver
                            .await
                            .map_err(|_| ApiError::Network("canceled".to_string()))
                    };
                    *outcome.borrow_mut() = Some(loader.run(fetch).await);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert!(loader.is_loading());

        loader.cancel();
        assert_eq!(loader.status(), PageStatus::Idle);
        let _ = sender.send(vec![1, 2, 3]);
        pool.run_until_stalled();

        assert_eq!(*outcome.borrow(), Some(LoadOutcome::Cancelled));
        assert_eq!(loader.status(), PageStatus::Idle);
        assert_eq!(loader.data(), None);
    }

    #[test]
    fn newer_run_supersedes_pending_one() {
        let loader: PageLoader<Vec<i32>> = PageLoader::new(MESSAGE);
        let (_sender, receiver) = oneshot::channel::<Vec<i32>>();
        let first = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        {
            let loader = loader.clone();
            let first = first.clone();
            pool.spawner()
                .spawn_local(async move {
                    let fetch = async move {
                        receiver
                            .await
                            .map_err(|_| ApiError::Network("canceled".to_string()))
                    };
                    *first.borrow_mut() = Some(loader.run(fetch).await);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        let second = block_on(loader.run(ready(Ok(vec![9]))));
        pool.run_until_stalled();

        assert_eq!(second, LoadOutcome::Loaded);
        assert_eq!(*first.borrow(), Some(LoadOutcome::Cancelled));
        assert_eq!(loader.data(), Some(vec![9]));
    }

    #[test]
    fn update_data_only_applies_when_loaded() {
        let loader: PageLoader<Vec<i32>> = PageLoader::new(MESSAGE);
        loader.update_data(|data| data.push(1));
        assert_eq!(loader.data(), None);

        block_on(loader.run(ready(Ok(vec![1]))));
        loader.update_data(|data| data[0] = 5);
        assert_eq!(loader.data(), Some(vec![5]));
    }
}
