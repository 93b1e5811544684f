// ============================================================================
// APP - Aplicación principal: wiring de servicios, rutas y montaje de páginas
// ============================================================================
// Cada cambio de ruta desmonta la página anterior (cancela su carga en vuelo)
// y monta la nueva, que lanza su propia carga.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{get_element_by_id, replace_children, set_document_title};
use crate::routes::Route;
use crate::services::{
    ApiClient, BrowserNavigator, GlooTransport, Navigator, SessionPersistence,
};
use crate::state::AppState;
use crate::utils::storage::{KeyValueStorage, LocalStorage};
use crate::viewmodels::{
    BookingViewModel, DashboardViewModel, FlightsViewModel, HomeViewModel, PlanetDetailViewModel,
    PlanetsViewModel, SessionViewModel,
};
use crate::views::auth::{
    new_login_form, new_register_form, render_login, render_register, LoginForm, RegisterForm,
};
use crate::views::dashboard::render_dashboard;
use crate::views::flights::render_flights;
use crate::views::home::render_home;
use crate::views::planet_detail::render_planet_detail;
use crate::views::planets::render_planets;
use crate::views::shared::render_layout;
use crate::views::{spawn_load, ViewContext};

/// Página montada: su viewmodel vive mientras la ruta esté activa
enum Page {
    Home(HomeViewModel),
    Planets(PlanetsViewModel),
    PlanetDetail(PlanetDetailViewModel),
    Flights(FlightsViewModel, BookingViewModel),
    Login(LoginForm),
    Register(RegisterForm),
    Dashboard(DashboardViewModel),
}

impl Page {
    fn unmount(&self) {
        match self {
            Page::Home(vm) => vm.cancel(),
            Page::Planets(vm) => vm.cancel(),
            Page::PlanetDetail(vm) => vm.cancel(),
            Page::Flights(vm, _) => vm.cancel(),
            Page::Dashboard(vm) => vm.cancel(),
            Page::Login(_) | Page::Register(_) => {}
        }
    }
}

pub struct App {
    state: AppState,
    api: ApiClient,
    navigator: Rc<dyn Navigator>,
    session: SessionViewModel,
    root: Element,
    route: Route,
    page: Option<Page>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let storage: Rc<dyn KeyValueStorage> = Rc::new(LocalStorage);
        let persistence = SessionPersistence::new(storage, config);
        let state = AppState::restore(&persistence);
        let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);
        let api = ApiClient::new(
            config,
            Rc::new(GlooTransport),
            state.session.clone(),
            persistence.clone(),
            navigator.clone(),
        );
        let session = SessionViewModel::new(api.clone(), state.clone(), persistence, navigator.clone());

        // Varias mutaciones seguidas → un solo repintado
        state.subscribe_to_changes(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        let route = Route::parse(&navigator.current_route());
        Ok(Self {
            state,
            api,
            navigator,
            session,
            root,
            route,
            page: None,
        })
    }

    /// Recupera la identidad de una sesión restaurada y monta la ruta inicial
    pub fn start(&mut self) -> Result<(), JsValue> {
        let session = self.session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = session.restore().await {
                log::warn!("⚠️ No se pudo recuperar el usuario: {}", e);
            }
        });
        self.mount(self.route.clone())
    }

    pub fn change_route(&mut self) -> Result<(), JsValue> {
        let route = Route::parse(&self.navigator.current_route());
        log::info!("🧭 Navegando a {}", route.path());
        self.mount(route)
    }

    fn mount(&mut self, route: Route) -> Result<(), JsValue> {
        if let Some(page) = self.page.take() {
            page.unmount();
        }
        set_document_title(route.title());

        let page = match &route {
            Route::Home => {
                let vm = HomeViewModel::new(self.api.clone(), self.state.clone());
                let loader = vm.clone();
                spawn_load(async move { loader.load().await });
                Page::Home(vm)
            }
            Route::Planets => {
                let vm = PlanetsViewModel::new(self.api.clone(), self.state.clone());
                let loader = vm.clone();
                spawn_load(async move { loader.load().await });
                Page::Planets(vm)
            }
            Route::PlanetDetail(slug) => {
                let vm = PlanetDetailViewModel::new(self.api.clone(), self.state.clone(), slug);
                let loader = vm.clone();
                spawn_load(async move { loader.load().await });
                Page::PlanetDetail(vm)
            }
            Route::Flights => {
                let vm = FlightsViewModel::new(self.api.clone(), self.state.clone());
                let booking = BookingViewModel::new(
                    self.api.clone(),
                    self.state.clone(),
                    self.navigator.clone(),
                );
                let loader = vm.clone();
                spawn_load(async move { loader.load().await });
                Page::Flights(vm, booking)
            }
            Route::Login => Page::Login(new_login_form()),
            Route::Register => Page::Register(new_register_form()),
            Route::Dashboard => {
                let vm = DashboardViewModel::new(
                    self.api.clone(),
                    self.state.clone(),
                    self.session.clone(),
                    self.navigator.clone(),
                );
                let loader = vm.clone();
                spawn_load(async move { loader.load().await });
                Page::Dashboard(vm)
            }
        };

        self.page = Some(page);
        self.route = route;
        self.render()
    }

    fn context(&self) -> ViewContext {
        ViewContext {
            state: self.state.clone(),
            navigator: self.navigator.clone(),
            session: self.session.clone(),
        }
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context();
        let content = match &self.page {
            Some(Page::Home(vm)) => render_home(&ctx, vm)?,
            Some(Page::Planets(vm)) => render_planets(&ctx, vm)?,
            Some(Page::PlanetDetail(vm)) => render_planet_detail(&ctx, vm)?,
            Some(Page::Flights(vm, booking)) => render_flights(&ctx, vm, booking)?,
            Some(Page::Login(form)) => render_login(&ctx, form)?,
            Some(Page::Register(form)) => render_register(&ctx, form)?,
            Some(Page::Dashboard(vm)) => render_dashboard(&ctx, vm)?,
            None => return Ok(()),
        };
        let layout = render_layout(&ctx, &self.route, content)?;
        replace_children(&self.root, &layout)
    }
}
