use {
    chrono::NaiveDate,
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, SidePanel, Visuals},
    },
    egui_extras::DatePickerButton,
    serde::{Deserialize, Serialize},
    std::path::PathBuf,
    strum::IntoEnumIterator,
};

use crate::{
    Cli,
    config::plot::PLOT_CONFIG,
    data::{HistoricalStore, ModelRepository},
    domain::{DateRange, ForecastMode},
    forecast::{ForecastError, ForecastOutcome, run_forecast},
    ui::{PlotView, SortColumn, SortDirection, TableView, UI_CONFIG, UI_TEXT},
};

/// One memoized pipeline run. The UI recomputes only when the input tuple
/// changes, so dragging a date picker does not re-read the CSV every frame.
struct CachedRun {
    key: (ForecastMode, NaiveDate, NaiveDate),
    result: Result<ForecastOutcome, String>,
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) mode: ForecastMode,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    pub(crate) sort_col: SortColumn,
    pub(crate) sort_dir: SortDirection,
    #[serde(skip)]
    models: Option<ModelRepository>,
    #[serde(skip)]
    history: Option<HistoricalStore>,
    #[serde(skip)]
    data_error: Option<String>,
    #[serde(skip)]
    plot_view: PlotView,
    #[serde(skip)]
    cache: Option<CachedRun>,
}

impl Default for App {
    fn default() -> Self {
        let mode = ForecastMode::default();
        Self {
            mode,
            start_date: ForecastMode::default_start(),
            end_date: mode.default_end(),
            sort_col: SortColumn::default(),
            sort_dir: SortDirection::Descending,
            models: None,
            history: None,
            data_error: None,
            plot_view: PlotView,
            cache: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        let data_dir = PathBuf::from(&args.data_dir);
        match ModelRepository::load(&data_dir) {
            Ok(models) => app.models = Some(models),
            Err(err) => {
                log::error!("Failed to load model artifacts: {}", err);
                app.data_error = Some(format!("{} {}", UI_TEXT.error_data_load_prefix, err));
            }
        }
        app.history = Some(HistoricalStore::new(&data_dir));

        app
    }

    fn render_controls(&mut self, ui: &mut eframe::egui::Ui) {
        ui.add_space(6.0);
        ui.heading(UI_TEXT.mode_heading);
        ui.label(UI_TEXT.mode_prompt);
        ui.add_space(4.0);

        for mode in ForecastMode::iter() {
            let selected = self.mode == mode;
            let label = format!("{}  {}", mode, mode.caption());
            if ui.radio(selected, label).clicked() && !selected {
                self.mode = mode;
                self.end_date = mode.default_end();
            }
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.heading(UI_TEXT.range_heading);
        ui.add_space(4.0);

        ui.label(UI_TEXT.label_start_date);
        ui.add(DatePickerButton::new(&mut self.start_date).id_salt("start_date"));
        ui.add_space(4.0);
        ui.label(UI_TEXT.label_end_date);
        ui.add(DatePickerButton::new(&mut self.end_date).id_salt("end_date"));

        // The pickers themselves are unconstrained; the mode bound is applied
        // here, after input, exactly once per frame.
        self.end_date = self.mode.clamp_end(self.start_date, self.end_date);
    }

    fn recompute_if_stale(&mut self) {
        let key = (self.mode, self.start_date, self.end_date);
        if matches!(&self.cache, Some(c) if c.key == key) {
            return;
        }

        let result = match (&self.models, &self.history) {
            (Some(models), Some(history)) => run_forecast(
                self.mode,
                DateRange::new(self.start_date, self.end_date),
                models,
                history,
            )
            .map_err(|err| match err {
                // The range error gets the friendly wording; the rest self-describe
                ForecastError::InvalidRange { .. } => UI_TEXT.error_invalid_range.to_string(),
                other => other.to_string(),
            }),
            _ => Err(self
                .data_error
                .clone()
                .unwrap_or_else(|| UI_TEXT.error_data_load_prefix.to_string())),
        };

        self.cache = Some(CachedRun { key, result });
    }

    fn render_central(&mut self, ui: &mut eframe::egui::Ui) {
        ui.heading(RichText::new(UI_TEXT.app_title).size(24.0));
        ui.add_space(8.0);

        if let Some(err) = &self.data_error {
            ui.colored_label(PLOT_CONFIG.color_error, err);
            return;
        }

        self.recompute_if_stale();
        let Some(cached) = &self.cache else { return };

        match &cached.result {
            Err(message) => {
                ui.colored_label(PLOT_CONFIG.color_error, message);
            }
            Ok(outcome) => {
                ui.heading(format!("{} ({})", UI_TEXT.chart_heading_prefix, self.mode));
                ui.add_space(4.0);
                self.plot_view.show(ui, &outcome.merged, &outcome.window);

                ui.add_space(12.0);
                ui.heading(format!("{} ({})", UI_TEXT.table_heading_prefix, self.mode));
                ui.add_space(4.0);

                let (mut col, mut dir) = (self.sort_col, self.sort_dir);
                TableView::new(&outcome.merged).render(ui, &mut col, &mut dir);
                self.sort_col = col;
                self.sort_dir = dir;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        SidePanel::left("controls")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(260.0)
            .show(ctx, |ui| self.render_controls(ui));

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| self.render_central(ui));
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
