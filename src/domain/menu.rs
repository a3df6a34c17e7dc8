use serde::{Deserialize, Serialize};

/// A named size with its own absolute price (e.g. "Large" at 6.50).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub name: String,
    pub price: f64,
}

/// Hot/cold surcharges for drinks and similar items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureOptions {
    pub enabled: bool,
    pub hot_surcharge: f64,
    pub cold_surcharge: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Temperature {
    Hot,
    Cold,
}

/// A dish or drink on a restaurant's menu.
///
/// Archived items stay on the restaurant record so the vendor can restore or
/// delete them, but they never reach the customer catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<SizeVariant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureOptions>,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.into(),
            archived: false,
            sizes: None,
            temperature: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<SizeVariant>) -> Self {
        self.sizes = Some(sizes);
        self
    }

    pub fn with_temperature(mut self, hot_surcharge: f64, cold_surcharge: f64) -> Self {
        self.temperature = Some(TemperatureOptions {
            enabled: true,
            hot_surcharge,
            cold_surcharge,
        });
        self
    }

    /// Looks up a size variant by name.
    pub fn size(&self, name: &str) -> Option<&SizeVariant> {
        self.sizes.as_ref()?.iter().find(|size| size.name == name)
    }

    /// Checks that a variant selection exists on this item.
    ///
    /// A size must name one of the item's size variants, and a temperature is
    /// only accepted when the temperature block is enabled.
    pub fn check_selection(&self, size: Option<&str>, temperature: Option<Temperature>) -> Result<(), String> {
        if let Some(name) = size {
            if self.size(name).is_none() {
                return Err(format!("{} has no size {}", self.id, name));
            }
        }
        if temperature.is_some() && !self.temperature.as_ref().is_some_and(|options| options.enabled) {
            return Err(format!("{} has no temperature options", self.id));
        }
        Ok(())
    }

    /// Price for a given variant selection.
    ///
    /// A size variant's price replaces the base price; a temperature surcharge
    /// is added on top, and only when the temperature block is enabled. Unknown
    /// size names fall back to the base price.
    pub fn compose_price(&self, size: Option<&str>, temperature: Option<Temperature>) -> f64 {
        let base = size
            .and_then(|name| self.size(name))
            .map(|variant| variant.price)
            .unwrap_or(self.price);

        let surcharge = match (&self.temperature, temperature) {
            (Some(options), Some(Temperature::Hot)) if options.enabled => options.hot_surcharge,
            (Some(options), Some(Temperature::Cold)) if options.enabled => options.cold_surcharge,
            _ => 0.0,
        };

        base + surcharge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> MenuItem {
        MenuItem::new("m1", "Latte", 4.0, "Drinks")
            .with_sizes(vec![
                SizeVariant { name: "Regular".into(), price: 4.0 },
                SizeVariant { name: "Large".into(), price: 5.5 },
            ])
            .with_temperature(0.0, 0.5)
    }

    #[test]
    fn size_price_replaces_base_price() {
        assert_eq!(latte().compose_price(Some("Large"), None), 5.5);
    }

    #[test]
    fn temperature_surcharge_is_added_on_top_of_size() {
        assert_eq!(latte().compose_price(Some("Large"), Some(Temperature::Cold)), 6.0);
        assert_eq!(latte().compose_price(None, Some(Temperature::Cold)), 4.5);
    }

    #[test]
    fn unknown_size_falls_back_to_base_price() {
        assert_eq!(latte().compose_price(Some("Venti"), None), 4.0);
    }

    #[test]
    fn disabled_temperature_block_adds_nothing() {
        let mut item = latte();
        if let Some(options) = item.temperature.as_mut() {
            options.enabled = false;
        }
        assert_eq!(item.compose_price(None, Some(Temperature::Cold)), 4.0);
    }

    #[test]
    fn plain_item_ignores_selection() {
        let item = MenuItem::new("m2", "Fries", 3.0, "Sides");
        assert_eq!(item.compose_price(Some("Large"), Some(Temperature::Hot)), 3.0);
    }

    #[test]
    fn selection_must_exist_on_the_item() {
        assert!(latte().check_selection(Some("Large"), Some(Temperature::Hot)).is_ok());
        assert!(latte().check_selection(None, None).is_ok());
        assert!(latte().check_selection(Some("Venti"), None).is_err());

        let fries = MenuItem::new("m2", "Fries", 3.0, "Sides");
        assert!(fries.check_selection(Some("Large"), None).is_err());
        assert!(fries.check_selection(None, Some(Temperature::Cold)).is_err());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(latte()).unwrap();
        assert_eq!(json["temperature"]["coldSurcharge"], 0.5);
        assert_eq!(json["archived"], false);
    }
}
