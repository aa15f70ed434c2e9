//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::dto::{
    FAILURE_TITLE, RegistrationRequest, RegistrationResponse, SUCCESS_TITLE, failure_message,
    success_message,
};
use crate::application::services::{
    NotificationManager, OPEN_STATUS_PERIOD, OpenStatusTicker, SessionLoad, SessionProvider,
};
use crate::application::use_cases::RegisterUseCase;
use crate::domain::Route;
use crate::domain::entities::{Catalog, UserType};
use crate::domain::errors::PersistenceError;
use crate::domain::ports::{ContactLauncherPort, DocumentStorePort, SessionStoragePort};
use crate::infrastructure::config::{AppConfig, StateConfig, StorageManager};
use crate::infrastructure::ClipboardService;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, KeyHint};

use super::company_detail_screen::{
    COMPANY_DETAIL_HINTS, CompanyDetailAction, CompanyDetailScreen, CompanyDetailView,
};
use super::main_menu_screen::{MainMenuAction, MainMenuScreen, MainMenuView};
use super::notification_popup::NotificationPopup;
use super::registration_screen::{
    REGISTRATION_HINTS, RegistrationAction, RegistrationScreen, RegistrationView,
};
use super::service_list_screen::{
    SERVICE_LIST_HINTS, ServiceListAction, ServiceListScreen, ServiceListView,
};
use super::services_menu_screen::{
    SERVICES_MENU_HINTS, ServicesMenuAction, ServicesMenuScreen, ServicesMenuView,
};
use super::splash_screen::SplashScreen;
use super::user_type_screen::{USER_TYPE_HINTS, UserTypeAction, UserTypeScreen, UserTypeView};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug)]
enum Action {
    RegistrationFinished {
        user_type: UserType,
        result: Result<RegistrationResponse, PersistenceError>,
    },
    SessionLoaded(SessionLoad),
    OpenStatusTick,
}

enum CurrentScreen {
    Splash(SplashScreen),
    UserType(UserTypeScreen),
    Registration(RegistrationScreen),
    MainMenu(MainMenuScreen),
    ServicesMenu(ServicesMenuScreen),
    ServiceList(ServiceListScreen),
    CompanyDetail(Box<CompanyDetailScreen>),
}

/// Adapters and data the application runs on.
pub struct AppServices {
    /// Reference data for the browsing screens.
    pub catalog: Arc<Catalog>,
    /// Where registrations are written.
    pub document_store: Arc<dyn DocumentStorePort>,
    /// Remembered sessions.
    pub session_storage: Arc<dyn SessionStoragePort>,
    /// Opens call and WhatsApp links.
    pub launcher: Arc<dyn ContactLauncherPort>,
    /// Receives share messages.
    pub clipboard: ClipboardService,
    /// Config directory holding `state.toml`.
    pub storage: StorageManager,
}

/// Screens, navigation history and the event loop.
pub struct App {
    running: bool,
    screen: CurrentScreen,
    route: Route,
    history: Vec<Route>,
    theme: Theme,
    catalog: Arc<Catalog>,
    register_use_case: RegisterUseCase,
    sessions: SessionProvider,
    launcher: Arc<dyn ContactLauncherPort>,
    clipboard: ClipboardService,
    storage: StorageManager,
    state: StateConfig,
    notifications: NotificationManager,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Builds the app on the splash screen, loading saved UI state.
    #[must_use]
    pub fn new(services: AppServices, config: &AppConfig) -> Self {
        let AppServices {
            catalog,
            document_store,
            session_storage,
            launcher,
            clipboard,
            storage,
        } = services;

        let state = storage.load_state().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load UI state, starting fresh");
            StateConfig::default()
        });

        let theme = Theme::from_config(&config.theme);
        let mut splash = SplashScreen::new(theme, config.ui.enable_animations);
        splash.set_data_ready();

        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            screen: CurrentScreen::Splash(splash),
            route: Route::UserTypeSelection,
            history: Vec::new(),
            theme,
            catalog,
            register_use_case: RegisterUseCase::new(document_store, Arc::clone(&session_storage)),
            sessions: SessionProvider::new(session_storage),
            launcher,
            clipboard,
            storage,
            state,
            notifications: NotificationManager::new(Duration::from_secs(
                config.ui.notification_duration,
            )),
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.tick(ANIMATION_TICK_RATE) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && self.handle_key(key) == EventResult::Exit
                    {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Advances animations and popups. Returns true if a redraw is needed.
    fn tick(&mut self, elapsed: Duration) -> bool {
        let had_notifications = self.notifications.has_notifications();
        self.notifications.tick();

        if let CurrentScreen::Splash(splash) = &mut self.screen {
            splash.tick(elapsed);
            if splash.is_complete() {
                debug!("Splash finished");
                self.reset_to(Route::UserTypeSelection);
            }
            return true;
        }

        had_notifications
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.base_style), area);

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let hints: &[KeyHint] = match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                frame.render_widget(splash, area);
                return;
            }
            CurrentScreen::UserType(screen) => {
                frame.render_widget(UserTypeView::new(screen, &self.theme), body);
                USER_TYPE_HINTS
            }
            CurrentScreen::Registration(screen) => {
                frame.render_widget(RegistrationView::new(screen, &self.theme), body);
                REGISTRATION_HINTS
            }
            CurrentScreen::MainMenu(screen) => {
                frame.render_widget(
                    MainMenuView::new(screen, self.sessions.state(), &self.theme),
                    body,
                );
                screen.hints()
            }
            CurrentScreen::ServicesMenu(screen) => {
                frame.render_widget(ServicesMenuView::new(screen, &self.theme), body);
                SERVICES_MENU_HINTS
            }
            CurrentScreen::ServiceList(screen) => {
                frame.render_widget(ServiceListView::new(screen, &self.theme), body);
                SERVICE_LIST_HINTS
            }
            CurrentScreen::CompanyDetail(screen) => {
                frame.render_widget(CompanyDetailView::new(screen, &self.theme), body);
                COMPANY_DETAIL_HINTS
            }
        };

        let mode = if self.theme.is_dark() {
            "Modo oscuro "
        } else {
            "Modo claro "
        };
        frame.render_widget(FooterBar::new(hints, &self.theme).right_info(Some(mode)), footer);

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification, &self.theme), area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                if EventHandler::is_submit_event(&key) || EventHandler::is_back_event(&key) {
                    splash.skip();
                }
            }
            CurrentScreen::UserType(screen) => {
                if let UserTypeAction::Selected(user_type) = screen.handle_key(key) {
                    self.navigate(Route::Registration(user_type));
                }
            }
            CurrentScreen::Registration(screen) => match screen.handle_key(key) {
                RegistrationAction::None => {}
                RegistrationAction::Back => self.go_back(),
                RegistrationAction::Submit(request) => self.submit_registration(request),
            },
            CurrentScreen::MainMenu(screen) => {
                let user_type = screen.user_type();
                let action = screen.handle_key(key, self.sessions.state());
                self.handle_main_menu_action(user_type, action);
            }
            CurrentScreen::ServicesMenu(screen) => match screen.handle_key(key) {
                ServicesMenuAction::None => {}
                ServicesMenuAction::Back => self.go_back(),
                ServicesMenuAction::Open(route) => self.navigate(route),
            },
            CurrentScreen::ServiceList(screen) => match screen.handle_key(key) {
                ServiceListAction::None => {}
                ServiceListAction::Back => self.go_back(),
                ServiceListAction::Open(route) => self.navigate(route),
            },
            CurrentScreen::CompanyDetail(screen) => {
                let action = screen.handle_key(key);
                self.handle_company_action(action);
            }
        }

        EventResult::Continue
    }

    fn handle_main_menu_action(&mut self, user_type: UserType, action: MainMenuAction) {
        match action {
            MainMenuAction::None => {}
            MainMenuAction::Open(route) => self.navigate(route),
            MainMenuAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                debug!(mode = ?self.theme.mode, "Theme toggled");
            }
            MainMenuAction::Retry => self.start_session_load(user_type),
            MainMenuAction::Logout => self.logout(),
            MainMenuAction::CitySelected(city) => {
                self.state.selected_city = Some(city);
                self.persist_state();
            }
        }
    }

    fn handle_company_action(&mut self, action: CompanyDetailAction) {
        match action {
            CompanyDetailAction::None => {}
            CompanyDetailAction::Back => self.go_back(),
            CompanyDetailAction::ToggleSaved(company_id) => {
                let saved = self.state.toggle_saved(&company_id);
                if let CurrentScreen::CompanyDetail(screen) = &mut self.screen {
                    screen.set_saved(saved);
                }
                self.persist_state();
                let message = if saved {
                    "Empresa guardada"
                } else {
                    "Empresa eliminada de guardados"
                };
                self.notifications.info("Guardados", message);
            }
            CompanyDetailAction::Share(text) => {
                self.clipboard.set_text(text);
                self.notifications
                    .info("Compartir", "Enlace copiado al portapapeles");
            }
            CompanyDetailAction::Contact(uri) => {
                if let Err(e) = self.launcher.launch(&uri) {
                    error!(error = %e, "Failed to launch contact");
                    self.notifications
                        .error("Error", "No se pudo abrir la aplicación de contacto");
                }
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RegistrationFinished { user_type, result } => {
                self.finish_registration(user_type, result);
            }
            Action::SessionLoaded(load) => {
                if !self.sessions.complete(load) {
                    debug!("Ignored superseded session load");
                }
            }
            Action::OpenStatusTick => {
                if let CurrentScreen::CompanyDetail(screen) = &mut self.screen {
                    screen.refresh_open_status(Local::now().time());
                }
            }
        }
    }

    fn submit_registration(&self, request: RegistrationRequest) {
        let user_type = request.record.user_type();
        let use_case = self.register_use_case.clone();
        let tx = self.action_tx.clone();

        info!(user_type = %user_type, "Registration submitted");
        tokio::spawn(async move {
            let result = use_case.execute(request).await;
            if tx
                .send(Action::RegistrationFinished { user_type, result })
                .is_err()
            {
                warn!("Application closed before registration finished");
            }
        });
    }

    fn finish_registration(
        &mut self,
        user_type: UserType,
        result: Result<RegistrationResponse, PersistenceError>,
    ) {
        match result {
            Ok(response) => {
                self.notifications
                    .success(SUCCESS_TITLE, success_message(user_type));
                self.sessions.adopt(response.session);
                self.reset_to(response.next);
            }
            Err(e) => {
                warn!(error = %e, user_type = %user_type, "Registration failed");
                self.notifications
                    .error(FAILURE_TITLE, failure_message(user_type));
                if let CurrentScreen::Registration(screen) = &mut self.screen {
                    screen.submission_failed();
                }
            }
        }
    }

    fn start_session_load(&mut self, user_type: UserType) {
        let ticket = self.sessions.begin_reload(user_type);
        let fetch = self.sessions.fetch(ticket);
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let load = fetch.await;
            if tx.send(Action::SessionLoaded(load)).is_err() {
                debug!("Application closed before session load finished");
            }
        });
    }

    fn logout(&mut self) {
        info!("Logging out");
        self.sessions.clear();
        self.reset_to(Route::UserTypeSelection);
        self.notifications.info("Sesión", "Sesión cerrada");
    }

    fn persist_state(&self) {
        if let Err(e) = self.storage.save_state(&self.state) {
            warn!(error = %e, "Failed to save UI state");
        }
    }

    fn navigate(&mut self, route: Route) {
        let Some(screen) = self.build_screen(&route) else {
            return;
        };
        debug!(route = ?route, "Navigating");
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        self.screen = screen;
    }

    fn go_back(&mut self) {
        while let Some(route) = self.history.pop() {
            if let Some(screen) = self.build_screen(&route) {
                debug!(route = ?route, "Navigating back");
                self.route = route;
                self.screen = screen;
                return;
            }
        }
    }

    fn reset_to(&mut self, route: Route) {
        self.history.clear();
        if let Some(screen) = self.build_screen(&route) {
            self.route = route;
            self.screen = screen;
        }
    }

    fn build_screen(&self, route: &Route) -> Option<CurrentScreen> {
        let catalog = &self.catalog;
        let screen = match route {
            Route::UserTypeSelection => CurrentScreen::UserType(UserTypeScreen::new()),
            Route::Registration(user_type) => CurrentScreen::Registration(
                RegistrationScreen::new(*user_type, catalog.category_names()),
            ),
            Route::MainMenu { user_type } => CurrentScreen::MainMenu(MainMenuScreen::new(
                *user_type,
                catalog.categories.clone(),
                catalog.city_choices(),
                self.state.selected_city.clone(),
            )),
            Route::ServicesMenu => {
                CurrentScreen::ServicesMenu(ServicesMenuScreen::new(catalog.services.clone()))
            }
            Route::ServiceList { category } => CurrentScreen::ServiceList(
                ServiceListScreen::new(category.clone(), catalog.listings_for(category)),
            ),
            Route::CompanyDetail { company_id } => {
                let profile = catalog
                    .listings
                    .iter()
                    .find(|listing| &listing.id == company_id)
                    .map(|listing| catalog.profile_for(listing))
                    .or_else(|| catalog.company(company_id).cloned());
                let Some(profile) = profile else {
                    warn!(company_id = %company_id, "Unknown company");
                    return None;
                };

                let mut screen = CompanyDetailScreen::new(
                    profile,
                    self.state.is_saved(company_id),
                    Local::now().time(),
                );
                screen.attach_ticker(OpenStatusTicker::spawn(
                    OPEN_STATUS_PERIOD,
                    self.action_tx.clone(),
                    || Action::OpenStatusTick,
                ));
                CurrentScreen::CompanyDetail(Box::new(screen))
            }
        };
        Some(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SessionState;
    use crate::application::services::form_state::{ClientField, RegistrationForm};
    use crate::domain::entities::{CompanyProfile, Schedule, Service, UserSession};
    use crate::domain::ports::mocks::{MockDocumentStore, MockLauncher, MockSessionStorage};
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    struct Harness {
        app: App,
        store: Arc<MockDocumentStore>,
        sessions: Arc<MockSessionStorage>,
        launcher: Arc<MockLauncher>,
        _dir: TempDir,
    }

    fn catalog() -> Catalog {
        Catalog {
            listings: vec![Service::new("1", "Cerrajería 24/7", "Cerrajería")],
            companies: vec![CompanyProfile {
                id: "1".into(),
                name: "Cerrajería 24/7".into(),
                rating: 4.5,
                description: String::new(),
                schedule: Schedule::around_the_clock(),
                phone: "+573001234567".into(),
                whatsapp: "+573001234567".into(),
                gallery: vec![],
            }],
            ..Catalog::default()
        }
    }

    fn harness() -> Harness {
        harness_with(MockSessionStorage::new())
    }

    fn harness_with(sessions: MockSessionStorage) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let sessions = Arc::new(sessions);
        let store = Arc::new(MockDocumentStore::new(true));
        let launcher = Arc::new(MockLauncher::default());
        let mut config = AppConfig::default();
        config.ui.enable_animations = false;

        let app = App::new(
            AppServices {
                catalog: Arc::new(catalog()),
                document_store: store.clone(),
                session_storage: sessions.clone(),
                launcher: launcher.clone(),
                clipboard: ClipboardService::new(),
                storage: StorageManager::with_dir(dir.path().to_path_buf()),
            },
            &config,
        );

        Harness {
            app,
            store,
            sessions,
            launcher,
            _dir: dir,
        }
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    async fn drain_one(app: &mut App) {
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);
    }

    #[tokio::test]
    async fn test_splash_leads_to_user_type_selection() {
        let Harness { mut app, .. } = harness();
        assert!(matches!(app.screen, CurrentScreen::Splash(_)));

        assert!(app.tick(ANIMATION_TICK_RATE));
        assert!(matches!(app.screen, CurrentScreen::UserType(_)));
        assert_eq!(app.route, Route::UserTypeSelection);
    }

    #[tokio::test]
    async fn test_client_registration_reaches_main_menu() {
        let Harness {
            mut app, store, ..
        } = harness();
        app.tick(ANIMATION_TICK_RATE);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Registration(UserType::Cliente));

        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Enter);
        drain_one(&mut app).await;

        assert_eq!(
            app.route,
            Route::MainMenu {
                user_type: UserType::Cliente
            }
        );
        assert!(app.history.is_empty());
        assert_eq!(store.calls().len(), 1);
        assert_eq!(
            app.notifications.current_notification().map(|n| n.title.as_str()),
            Some(SUCCESS_TITLE)
        );

        assert_eq!(
            app.sessions.state(),
            &SessionState::Ready(UserSession::new(UserType::Cliente, "Ana"))
        );
    }

    #[tokio::test]
    async fn test_new_user_is_greeted_when_remembering_fails() {
        let earlier =
            MockSessionStorage::with_session(UserSession::new(UserType::Cliente, "Beatriz"));
        earlier.set_fail_stores(true);
        let Harness {
            mut app, sessions, ..
        } = harness_with(earlier);
        app.tick(ANIMATION_TICK_RATE);

        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Enter);
        drain_one(&mut app).await;

        assert_eq!(
            app.sessions.current_session().map(UserSession::nombre),
            Some("Ana")
        );
        assert!(app.action_rx.try_recv().is_err());

        // The remembered profile is still the earlier one.
        let remembered = sessions.load_session(UserType::Cliente).await.unwrap();
        assert_eq!(remembered.nombre(), "Beatriz");
    }

    #[tokio::test]
    async fn test_retry_loads_remembered_session() {
        let remembered = MockSessionStorage::with_session(UserSession::new(
            UserType::Empresa,
            "Llaves Rápidas",
        ));
        remembered.set_fail_loads(true);
        let Harness {
            mut app, sessions, ..
        } = harness_with(remembered);
        app.tick(ANIMATION_TICK_RATE);
        app.reset_to(Route::MainMenu {
            user_type: UserType::Empresa,
        });

        app.start_session_load(UserType::Empresa);
        drain_one(&mut app).await;
        assert!(app.sessions.error().is_some());

        sessions.set_fail_loads(false);
        press(&mut app, KeyCode::Char('r'));
        drain_one(&mut app).await;
        assert_eq!(
            app.sessions.current_session().map(UserSession::nombre),
            Some("Llaves Rápidas")
        );
    }

    #[tokio::test]
    async fn test_failed_registration_stays_on_form() {
        let Harness {
            mut app, store, ..
        } = harness();
        store.set_should_succeed(false);
        app.tick(ANIMATION_TICK_RATE);

        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Ana");
        let CurrentScreen::Registration(screen) = &app.screen else {
            panic!("expected registration screen");
        };
        let typed = screen.form().clone();
        press(&mut app, KeyCode::Enter);
        drain_one(&mut app).await;

        assert_eq!(app.route, Route::Registration(UserType::Cliente));
        let CurrentScreen::Registration(screen) = &app.screen else {
            panic!("expected registration screen");
        };
        assert!(!screen.is_submitting());
        assert_eq!(screen.form(), &typed);
        let RegistrationForm::Client(form) = screen.form() else {
            panic!("expected client form");
        };
        assert_eq!(form.fields().get(ClientField::Name), "Ana");
        assert_eq!(&store.calls()[0].key, typed.submission_key());
        assert_eq!(
            app.notifications.current_notification().map(|n| n.title.as_str()),
            Some(FAILURE_TITLE)
        );
    }

    #[tokio::test]
    async fn test_back_returns_through_history() {
        let Harness { mut app, .. } = harness();
        app.tick(ANIMATION_TICK_RATE);

        app.navigate(Route::ServiceList {
            category: "Cerrajería".into(),
        });
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, CurrentScreen::CompanyDetail(_)));

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.screen, CurrentScreen::ServiceList(_)));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::UserTypeSelection);
    }

    #[tokio::test]
    async fn test_company_actions() {
        let Harness {
            mut app, launcher, ..
        } = harness();
        app.tick(ANIMATION_TICK_RATE);
        app.navigate(Route::CompanyDetail {
            company_id: "1".into(),
        });

        press(&mut app, KeyCode::Char('s'));
        assert!(app.state.is_saved("1"));
        let reloaded = app.storage.load_state().unwrap();
        assert!(reloaded.is_saved("1"));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(launcher.launched(), ["tel:+573001234567"]);
    }

    #[tokio::test]
    async fn test_unknown_company_does_not_navigate() {
        let Harness { mut app, .. } = harness();
        app.tick(ANIMATION_TICK_RATE);

        app.navigate(Route::CompanyDetail {
            company_id: "missing".into(),
        });

        assert_eq!(app.route, Route::UserTypeSelection);
        assert!(app.history.is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let Harness { mut app, .. } = harness();
        app.tick(ANIMATION_TICK_RATE);
        app.reset_to(Route::MainMenu {
            user_type: UserType::Empresa,
        });

        press(&mut app, KeyCode::Char('l'));

        assert_eq!(app.route, Route::UserTypeSelection);
        assert!(app.sessions.current_session().is_none());
    }

    #[tokio::test]
    async fn test_ctrl_c_exits() {
        let Harness { mut app, .. } = harness();
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
    }
}
