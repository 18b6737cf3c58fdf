use log::info;
use crate::dashboard::models::{FetchedForecast, Location};
use crate::forecast::conditions::ThemeMode;

/// What can be shown for the selected location right now
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    Ready(&'a FetchedForecast),
    Failed(&'a str),
    Pending,
}

/// Selection and latest fetch results for the dashboard.
///
/// Fetch cycles are tagged with the location they were started for, a result is only
/// taken in if that location is still the selected one. This keeps a slow cycle for a
/// previous selection from overwriting a newer one.
pub struct DashboardState {
    selected: Location,
    theme_mode: ThemeMode,
    latest: Option<FetchedForecast>,
    last_error: Option<String>,
}

impl DashboardState {
    /// Creates a new state with nothing fetched yet
    ///
    /// # Arguments
    ///
    /// * 'selected' - the initially selected location
    /// * 'theme_mode' - initial theme mode
    pub fn new(selected: Location, theme_mode: ThemeMode) -> Self {
        Self {
            selected,
            theme_mode,
            latest: None,
            last_error: None,
        }
    }

    pub fn selected(&self) -> &Location {
        &self.selected
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn set_theme_mode(&mut self, theme_mode: ThemeMode) {
        self.theme_mode = theme_mode;
    }

    /// Selects a new location, whatever was fetched for the previous one is dropped
    ///
    /// # Arguments
    ///
    /// * 'location' - the new location
    pub fn select(&mut self, location: Location) {
        self.selected = location;
        self.latest = None;
        self.last_error = None;
    }

    /// Takes in a successful fetch result, returns false if it was stale and dropped
    ///
    /// # Arguments
    ///
    /// * 'fetched' - the fetch cycle result
    pub fn accept(&mut self, fetched: FetchedForecast) -> bool {
        if fetched.location != self.selected {
            info!("dropping stale forecast for {}", fetched.location.name);
            return false;
        }

        self.latest = Some(fetched);
        self.last_error = None;
        true
    }

    /// Records a failed fetch, returns false if it was stale and dropped.
    ///
    /// The error is shown until the next successful cycle, earlier data is not served.
    ///
    /// # Arguments
    ///
    /// * 'location' - the location the failed cycle was started for
    /// * 'error' - error description
    pub fn reject(&mut self, location: &Location, error: String) -> bool {
        if *location != self.selected {
            info!("dropping stale fetch error for {}", location.name);
            return false;
        }

        self.last_error = Some(error);
        true
    }

    pub fn view(&self) -> View<'_> {
        match (&self.latest, &self.last_error) {
            (_, Some(error)) => View::Failed(error),
            (Some(fetched), None) => View::Ready(fetched),
            (None, None) => View::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, lat: f64, lon: f64) -> Location {
        Location { name: name.to_string(), lat, lon }
    }

    fn fetched(location: Location) -> FetchedForecast {
        FetchedForecast { location, series: Vec::new(), sun: None }
    }

    #[test]
    fn should_start_pending() {
        let state = DashboardState::new(location("Stockholm", 59.3293, 18.0686), ThemeMode::Auto);
        assert_eq!(state.view(), View::Pending);
    }

    #[test]
    fn should_drop_results_for_previous_selection() {
        let stockholm = location("Stockholm", 59.3293, 18.0686);
        let malmo = location("Malmö", 55.605, 13.0038);
        let mut state = DashboardState::new(stockholm.clone(), ThemeMode::Auto);

        state.select(malmo.clone());

        assert!(!state.accept(fetched(stockholm.clone())));
        assert!(!state.reject(&stockholm, "timeout".to_string()));
        assert_eq!(state.view(), View::Pending);

        assert!(state.accept(fetched(malmo.clone())));
        match state.view() {
            View::Ready(f) => assert_eq!(f.location, malmo),
            v => panic!("unexpected view {:?}", v),
        }
    }

    #[test]
    fn should_report_failed_refresh_over_previous_data() {
        let stockholm = location("Stockholm", 59.3293, 18.0686);
        let mut state = DashboardState::new(stockholm.clone(), ThemeMode::Auto);

        assert!(state.reject(&stockholm, "timeout".to_string()));
        assert_eq!(state.view(), View::Failed("timeout"));

        assert!(state.accept(fetched(stockholm.clone())));
        assert!(state.reject(&stockholm, "timeout".to_string()));
        assert_eq!(state.view(), View::Failed("timeout"));

        assert!(state.accept(fetched(stockholm.clone())));
        assert!(matches!(state.view(), View::Ready(_)));
    }

    #[test]
    fn should_clear_on_new_selection() {
        let stockholm = location("Stockholm", 59.3293, 18.0686);
        let mut state = DashboardState::new(stockholm.clone(), ThemeMode::Day);
        state.accept(fetched(stockholm));

        state.select(location("My Location", 57.0, 12.0));
        state.set_theme_mode(ThemeMode::Night);

        assert_eq!(state.view(), View::Pending);
        assert_eq!(state.selected().name, "My Location");
        assert_eq!(state.theme_mode(), ThemeMode::Night);
    }
}
