/// Known location labels containing `partial`, case-insensitively, in list order
///
/// An empty partial yields no suggestions.
pub fn suggest_locations<'a, S: AsRef<str>>(partial: &str, labels: &'a [S]) -> Vec<&'a str> {
    if partial.is_empty() {
        return Vec::new();
    }
    let needle = partial.to_lowercase();
    labels
        .iter()
        .map(|label| label.as_ref())
        .filter(|label| label.to_lowercase().contains(&needle))
        .collect()
}

/// Autocomplete state behind a location text field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationInput {
    query: String,
    suggestions: Vec<String>,
    open: bool,
}

impl LocationInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a keystroke: store the text and recompute suggestions
    pub fn on_input<S: AsRef<str>>(&mut self, text: &str, labels: &[S]) {
        self.query = text.to_string();
        if text.is_empty() {
            self.suggestions.clear();
            self.open = false;
        } else {
            self.suggestions = suggest_locations(text, labels)
                .into_iter()
                .map(str::to_string)
                .collect();
            self.open = true;
        }
    }

    /// Accept a suggestion as the query
    pub fn select(&mut self, label: &str) {
        self.query = label.to_string();
        self.open = false;
    }

    /// Close the dropdown without changing the query (click outside)
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Whether the dropdown should be drawn
    pub fn is_dropdown_visible(&self) -> bool {
        self.open && !self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::MOCK_LOCATIONS;

    #[test]
    fn suggestions_keep_list_order() {
        let result = suggest_locations("são paulo", MOCK_LOCATIONS);
        assert_eq!(
            result,
            vec![
                "Guarulhos, São Paulo",
                "São Paulo, São Paulo",
                "Campinas, São Paulo",
            ]
        );
    }

    #[test]
    fn suggestions_ignore_case() {
        let lower = suggest_locations("rio", MOCK_LOCATIONS);
        let upper = suggest_locations("RIO", MOCK_LOCATIONS);
        assert_eq!(lower, upper);
        assert_eq!(
            lower,
            vec!["Rio de Janeiro, Rio de Janeiro", "Porto Alegre, Rio Grande do Sul"]
        );
    }

    #[test]
    fn empty_or_unknown_partial_gives_nothing() {
        assert!(suggest_locations("", MOCK_LOCATIONS).is_empty());
        assert!(suggest_locations("xyz", MOCK_LOCATIONS).is_empty());
    }

    #[test]
    fn works_with_owned_labels() {
        let labels = vec!["Leblon, Rio de Janeiro".to_string(), "Moema, São Paulo".to_string()];
        assert_eq!(suggest_locations("moe", &labels), vec!["Moema, São Paulo"]);
    }

    #[test]
    fn typing_opens_and_clearing_closes_the_dropdown() {
        let mut input = LocationInput::new();

        input.on_input("cur", MOCK_LOCATIONS);
        assert_eq!(input.query(), "cur");
        assert_eq!(input.suggestions(), ["Curitiba, Paraná".to_string()]);
        assert!(input.is_dropdown_visible());

        input.on_input("", MOCK_LOCATIONS);
        assert!(input.suggestions().is_empty());
        assert!(!input.is_dropdown_visible());
    }

    #[test]
    fn no_matches_hides_the_dropdown() {
        let mut input = LocationInput::new();
        input.on_input("xyz", MOCK_LOCATIONS);
        assert!(!input.is_dropdown_visible());
        assert_eq!(input.query(), "xyz");
    }

    #[test]
    fn selecting_fills_the_query_and_closes() {
        let mut input = LocationInput::new();
        input.on_input("bel", MOCK_LOCATIONS);
        assert_eq!(input.suggestions().len(), 2);

        input.select("Belém, Pará");
        assert_eq!(input.query(), "Belém, Pará");
        assert!(!input.is_dropdown_visible());
    }

    #[test]
    fn dismiss_keeps_query() {
        let mut input = LocationInput::new();
        input.on_input("sal", MOCK_LOCATIONS);
        input.dismiss();
        assert_eq!(input.query(), "sal");
        assert!(!input.is_dropdown_visible());

        input.clear();
        assert_eq!(input, LocationInput::default());
    }
}
