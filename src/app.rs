use crate::config::Config;
use crate::error::{Error, Result};
use crate::graphql::{AsyncOperation, GraphqlClient, TableRow};
use crate::models::{FilterSession, QueryTicket, ResultState};
use crate::ui::components::*;
use crate::ui::{setup_styles, ERROR_COLOR};
use eframe::egui;
use poll_promise::Promise;
use std::future::Future;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct TableFilterApp {
    pub config: Config,
    pub client: Option<Arc<GraphqlClient>>,

    // Tokio runtime for async operations
    pub runtime: Arc<tokio::runtime::Runtime>,

    // Filters, suggestions, column catalog and result state
    pub session: FilterSession,

    pub pending_operations: Vec<AsyncOperation>,

    // Status
    pub status_message: String,
    pub status_is_error: bool,

    // Settings dialog edits a copy until saved
    pub settings_draft: Option<Config>,

    // UI Components
    menu_bar: MenuBar,
    filter_bar: FilterBar,
    status_bar: StatusBar,
    settings_dialog: SettingsDialog,
    data_grid: DataGrid,
}

impl TableFilterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, runtime: Arc<tokio::runtime::Runtime>) -> Self {
        setup_styles(&cc.egui_ctx);

        let mut app = Self {
            config,
            client: None,
            runtime,
            session: FilterSession::new(),
            pending_operations: Vec::new(),
            status_message: "Ready".to_string(),
            status_is_error: false,
            settings_draft: None,
            menu_bar: MenuBar::new(),
            filter_bar: FilterBar::new(),
            status_bar: StatusBar::new(),
            settings_dialog: SettingsDialog::new(),
            data_grid: DataGrid::new(),
        };

        // Column catalog is fetched once on startup
        app.connect();

        app
    }

    /// Rebuilds the client from the current config and reloads the column catalog.
    pub fn connect(&mut self) {
        match GraphqlClient::new(&self.config) {
            Ok(client) => {
                info!(endpoint = client.endpoint(), "using graphql endpoint");
                self.client = Some(Arc::new(client));
                self.load_column_names();
            }
            Err(e) => {
                error!(error = %e, "could not create graphql client");
                self.client = None;
                self.set_error(&e);
            }
        }
    }

    fn spawn<T, F>(&self, name: &str, future: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let runtime = Arc::clone(&self.runtime);
        Promise::spawn_thread(name, move || runtime.block_on(future))
    }

    fn client(&self) -> Result<Arc<GraphqlClient>> {
        self.client
            .clone()
            .ok_or_else(|| Error::Config("No GraphQL endpoint configured".to_string()))
    }

    pub fn load_column_names(&mut self) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => return self.set_error(&e),
        };

        self.set_status("Loading column names...");
        let promise = self.spawn("load_column_names", async move { client.get_column_names().await });
        self.pending_operations.push(AsyncOperation::LoadColumnNames(promise));
    }

    fn run_table_query(&mut self, ticket: QueryTicket) {
        let QueryTicket {
            generation,
            query,
            columns,
        } = ticket;
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                self.set_error(&e);
                self.session.complete_table_query(generation, Err(e));
                return;
            }
        };

        info!(generation, filtered = query.filter_columns.is_some(), "issuing table query");
        self.set_status("Loading table data...");
        let promise = self.spawn("load_table_data", async move {
            client.get_table_data(&query, &columns).await
        });
        self.pending_operations.push(AsyncOperation::LoadTableData(generation, promise));
    }

    fn fetch_row_values(&mut self, column: String) {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => {
                self.session.complete_suggestions(column, Err(e));
                return;
            }
        };

        let lookup = column.clone();
        let promise = self.spawn("load_row_values", async move { client.get_row_values(&lookup).await });
        self.pending_operations.push(AsyncOperation::LoadRowValues(column, promise));
    }

    fn handle_filter_event(&mut self, event: FilterBarEvent) {
        match event {
            FilterBarEvent::AddFilter(column) => {
                if let Some(lookup) = self.session.add_filter(&column) {
                    self.fetch_row_values(lookup);
                }
            }
            FilterBarEvent::SelectColumn(index, column) => match self.session.select_column(index, &column) {
                Ok(Some(lookup)) => self.fetch_row_values(lookup),
                Ok(None) => {}
                Err(e) => self.set_error(&e),
            },
            FilterBarEvent::SetValue(index, value) => {
                if let Err(e) = self.session.set_value(index, &value) {
                    self.set_error(&e);
                }
            }
            FilterBarEvent::RemoveFilter(index) => {
                if let Err(e) = self.session.remove_filter(index) {
                    self.set_error(&e);
                }
            }
            FilterBarEvent::Apply => {
                let ticket = self.session.apply_filters();
                self.run_table_query(ticket);
            }
            FilterBarEvent::Clear => {
                let ticket = self.session.clear_filters();
                self.run_table_query(ticket);
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, e: &Error) {
        self.status_message = e.to_string();
        self.status_is_error = true;
    }

    fn save_settings(&mut self, draft: Config) {
        self.config = draft;
        if let Err(e) = self.config.save() {
            warn!(error = %e, "failed to save config");
        }
        self.connect();
    }
}

impl eframe::App for TableFilterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle pending async operations
        self.handle_async_operations();

        // Top menu bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            if let Some(event) = self.menu_bar.show(ui, self.session.column_names.len()) {
                match event {
                    MenuBarEvent::ShowSettings => self.settings_draft = Some(self.config.clone()),
                    MenuBarEvent::ReloadColumns => self.load_column_names(),
                    MenuBarEvent::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                }
            }
        });

        // Filter editor
        egui::TopBottomPanel::top("filter_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(event) = self.filter_bar.show(ui, &self.session) {
                self.handle_filter_event(event);
            }
            ui.add_space(4.0);
        });

        // Status bar
        let row_count = self.session.result_state().rows().map(<[TableRow]>::len);
        let endpoint = self.config.endpoint.clone();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar.show(ui, &self.status_message, self.status_is_error, &endpoint, row_count);
        });

        // Settings dialog
        if let Some(draft) = self.settings_draft.as_mut() {
            if let Some(event) = self.settings_dialog.show(ctx, draft) {
                let draft = self.settings_draft.take();
                if let (SettingsDialogEvent::Save, Some(draft)) = (event, draft) {
                    self.save_settings(draft);
                }
            }
        }

        // Main content area - results
        egui::CentralPanel::default().show(ctx, |ui| match self.session.result_state() {
            ResultState::Idle => {
                ui.centered_and_justified(|ui| {
                    ui.label("Apply filters to load data");
                });
            }
            ResultState::Loading { .. } => {
                ui.centered_and_justified(|ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading...");
                    });
                });
            }
            ResultState::Failed { error, .. } => {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new(error.to_string()).color(ERROR_COLOR));
                });
            }
            ResultState::Loaded { rows, .. } if rows.is_empty() => {
                ui.centered_and_justified(|ui| {
                    ui.label("No rows match the current filters");
                });
            }
            ResultState::Loaded { columns, rows, .. } => {
                self.data_grid.show(ui, columns, rows);
            }
        });

        // Request repaint if we're waiting for async operations
        if !self.pending_operations.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl TableFilterApp {
    fn handle_async_operations(&mut self) {
        for operation in std::mem::take(&mut self.pending_operations) {
            match operation {
                AsyncOperation::LoadColumnNames(promise) => match promise.try_take() {
                    Ok(result) => self.finish_column_names(result),
                    Err(promise) => self.pending_operations.push(AsyncOperation::LoadColumnNames(promise)),
                },
                AsyncOperation::LoadTableData(generation, promise) => match promise.try_take() {
                    Ok(result) => self.finish_table_data(generation, result),
                    Err(promise) => self
                        .pending_operations
                        .push(AsyncOperation::LoadTableData(generation, promise)),
                },
                AsyncOperation::LoadRowValues(column, promise) => match promise.try_take() {
                    Ok(result) => self.session.complete_suggestions(column, result),
                    Err(promise) => self
                        .pending_operations
                        .push(AsyncOperation::LoadRowValues(column, promise)),
                },
            }
        }
    }

    fn finish_column_names(&mut self, result: Result<Vec<String>>) {
        match result {
            Ok(names) => {
                self.set_status(format!("Loaded {} column names", names.len()));
                self.session.set_column_names(names);
            }
            Err(e) => {
                error!(error = %e, "failed to load column names");
                self.set_error(&e);
            }
        }
    }

    fn finish_table_data(&mut self, generation: u64, result: Result<Vec<TableRow>>) {
        let outcome = match &result {
            Ok(rows) => Ok(format!("Loaded {} rows", rows.len())),
            Err(e) => Err(e.clone()),
        };

        if !self.session.complete_table_query(generation, result) {
            return;
        }

        self.data_grid.clear_selection();
        match outcome {
            Ok(message) => self.set_status(message),
            Err(e) => {
                warn!(generation, error = %e, "table query failed");
                self.set_error(&e);
            }
        }
    }
}
