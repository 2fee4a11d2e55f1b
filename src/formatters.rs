use crate::constants::BLOCK_SEPARATOR;
use crate::models::{AlertFeature, ForecastPeriod};

/// Formats a single alert feature into a readable block
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "\nEvent: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}\n",
        props.event.as_deref().unwrap_or("Unknown"),
        props.area_desc.as_deref().unwrap_or("Unknown"),
        props.severity.as_deref().unwrap_or("Unknown"),
        props
            .description
            .as_deref()
            .unwrap_or("No description available"),
        props
            .instruction
            .as_deref()
            .unwrap_or("No specific instructions provided"),
    )
}

/// Formats weather alerts into a human-readable string
pub fn format_alerts(alerts: &[AlertFeature]) -> String {
    alerts
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Formats every forecast period, in order, into a human-readable string
pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .map(|period| {
            format!(
                "\n{}:\nTemperature: {}\u{00b0}{}\nWind: {} {}\nForecast: {}\n",
                period.name,
                period.temperature,
                period.temperature_unit,
                period.wind_speed,
                period.wind_direction,
                period.detailed_forecast
            )
        })
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertProperties;

    fn period(name: &str, temperature: serde_json::Number) -> ForecastPeriod {
        ForecastPeriod {
            name: name.to_string(),
            temperature,
            temperature_unit: "F".to_string(),
            wind_speed: "10 mph".to_string(),
            wind_direction: "NW".to_string(),
            detailed_forecast: format!("{name} details."),
        }
    }

    #[test]
    fn alert_renders_all_fields() {
        let feature = AlertFeature {
            properties: AlertProperties {
                event: Some("Flood Warning".to_string()),
                area_desc: Some("Travis, TX".to_string()),
                severity: Some("Severe".to_string()),
                description: Some("River rising.".to_string()),
                instruction: Some("Move to higher ground.".to_string()),
            },
        };

        assert_eq!(
            format_alert(&feature),
            "\nEvent: Flood Warning\nArea: Travis, TX\nSeverity: Severe\n\
             Description: River rising.\nInstructions: Move to higher ground.\n"
        );
    }

    #[test]
    fn alert_missing_fields_use_placeholders() {
        let feature = AlertFeature {
            properties: AlertProperties::default(),
        };

        assert_eq!(
            format_alert(&feature),
            "\nEvent: Unknown\nArea: Unknown\nSeverity: Unknown\n\
             Description: No description available\n\
             Instructions: No specific instructions provided\n"
        );
    }

    #[test]
    fn alerts_are_joined_in_order() {
        let alerts: Vec<AlertFeature> = ["Wind Advisory", "Heat Advisory"]
            .iter()
            .map(|event| AlertFeature {
                properties: AlertProperties {
                    event: Some(event.to_string()),
                    ..AlertProperties::default()
                },
            })
            .collect();

        let output = format_alerts(&alerts);
        assert_eq!(output.matches(BLOCK_SEPARATOR).count(), 1);
        let wind = output.find("Event: Wind Advisory").unwrap();
        let heat = output.find("Event: Heat Advisory").unwrap();
        assert!(wind < heat);
    }

    #[test]
    fn forecast_renders_every_period() {
        let periods = vec![
            period("Tonight", 54i64.into()),
            period("Thursday", 71i64.into()),
            period("Thursday Night", 50i64.into()),
        ];

        let output = format_forecast(&periods);
        let blocks: Vec<&str> = output.split(BLOCK_SEPARATOR).collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[1],
            "\nThursday:\nTemperature: 71°F\nWind: 10 mph NW\nForecast: Thursday details.\n"
        );
    }

    #[test]
    fn forecast_keeps_fractional_temperature() {
        let number = serde_json::Number::from_f64(21.5).unwrap();
        let output = format_forecast(&[period("Today", number)]);
        assert!(output.contains("Temperature: 21.5°F\n"));
    }

    #[test]
    fn empty_forecast_renders_nothing() {
        assert_eq!(format_forecast(&[]), "");
    }
}
