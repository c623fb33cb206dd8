//! Tool definitions module.
//!
//! Each Google API family lives in its own file as a set of static
//! [`EndpointDescriptor`]s. [`all`] is the catalog every other part of the
//! server (router, registry, HTTP dispatch) is built from.

pub mod distance;
pub mod places;
pub mod roads;
pub mod timezone;
pub mod weather;

use super::api::EndpointDescriptor;

pub use distance::DISTANCE_MATRIX;
pub use places::{
    AUTOCOMPLETE_PLACE, FIND_PLACE_FROM_TEXT, GET_PLACE_DETAILS, NEARBY_SEARCH,
    QUERY_AUTOCOMPLETE, TEXT_SEARCH,
};
pub use roads::{NEAREST_ROADS, SNAP_TO_ROADS};
pub use timezone::GET_TIME_ZONE;
pub use weather::{CURRENT_CONDITIONS, FORECAST_DAYS, FORECAST_HOURS, GET_HOURLY_WEATHER};

static CATALOG: [&EndpointDescriptor; 14] = [
    &DISTANCE_MATRIX,
    &AUTOCOMPLETE_PLACE,
    &QUERY_AUTOCOMPLETE,
    &GET_PLACE_DETAILS,
    &NEARBY_SEARCH,
    &TEXT_SEARCH,
    &FIND_PLACE_FROM_TEXT,
    &GET_TIME_ZONE,
    &NEAREST_ROADS,
    &SNAP_TO_ROADS,
    &FORECAST_DAYS,
    &FORECAST_HOURS,
    &GET_HOURLY_WEATHER,
    &CURRENT_CONDITIONS,
];

/// Every endpoint exposed as a tool.
pub fn all() -> &'static [&'static EndpointDescriptor] {
    &CATALOG
}

/// Find an endpoint by tool name.
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    CATALOG.iter().copied().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::api::request::build_query;
    use crate::domains::tools::api::{HeaderPolicy, ParamPolicy};
    use serde_json::{Map, Value};
    use std::collections::HashSet;

    /// Query produced when only the required arguments are given (all "1").
    fn required_only(descriptor: &EndpointDescriptor) -> Vec<(String, String)> {
        let arguments: Map<String, Value> = descriptor
            .required()
            .into_iter()
            .map(|name| (name.to_string(), Value::from("1")))
            .collect();
        build_query(descriptor, &arguments, Some("K"))
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = all().iter().map(|d| d.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("get_time_zone").map(|d| d.path), Some("/maps/api/timezone/json"));
        assert!(find("geocode").is_none());
    }

    #[test]
    fn test_required_params_come_first() {
        for descriptor in all() {
            let first_optional = descriptor
                .params
                .iter()
                .position(|p| !p.is_required())
                .unwrap_or(descriptor.params.len());
            assert!(
                descriptor.params[first_optional..]
                    .iter()
                    .all(|p| !p.is_required()),
                "{} declares a required parameter after an optional one",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_defaults_declared_before_if_present() {
        for descriptor in all() {
            let mut seen_if_present = false;
            for param in descriptor.params {
                match param.policy {
                    ParamPolicy::IfPresent => seen_if_present = true,
                    ParamPolicy::Default(_) => assert!(
                        !seen_if_present,
                        "{}: default '{}' declared after an optional parameter",
                        descriptor.name, param.name
                    ),
                    ParamPolicy::Required => {}
                }
            }
        }
    }

    #[test]
    fn test_required_only_queries() {
        let cases: Vec<(&EndpointDescriptor, Vec<(String, String)>)> = vec![
            (
                &DISTANCE_MATRIX,
                pairs(&[
                    ("origins", "1"),
                    ("destinations", "1"),
                    ("mode", "driving"),
                    ("units", "metric"),
                    ("language", "en"),
                    ("traffic_model", "best_guess"),
                    ("key", "K"),
                ]),
            ),
            (
                &AUTOCOMPLETE_PLACE,
                pairs(&[("input", "1"), ("language", "en"), ("region", "en"), ("key", "K")]),
            ),
            (
                &QUERY_AUTOCOMPLETE,
                pairs(&[("input", "1"), ("language", "en"), ("key", "K")]),
            ),
            (
                &GET_PLACE_DETAILS,
                pairs(&[("place_id", "1"), ("language", "en"), ("region", "en"), ("key", "K")]),
            ),
            (
                &NEARBY_SEARCH,
                pairs(&[("location", "1"), ("language", "en"), ("key", "K")]),
            ),
            (
                &TEXT_SEARCH,
                pairs(&[("query", "1"), ("language", "en"), ("region", "en"), ("key", "K")]),
            ),
            (
                &FIND_PLACE_FROM_TEXT,
                pairs(&[("input", "1"), ("inputtype", "1"), ("language", "en"), ("key", "K")]),
            ),
            (
                &GET_TIME_ZONE,
                pairs(&[("location", "1"), ("timestamp", "1"), ("key", "K")]),
            ),
            (&NEAREST_ROADS, pairs(&[("points", "1"), ("key", "K")])),
            (
                &SNAP_TO_ROADS,
                pairs(&[("path", "1"), ("interpolate", "false"), ("key", "K")]),
            ),
            (
                &FORECAST_DAYS,
                pairs(&[
                    ("location.latitude", "1"),
                    ("location.longitude", "1"),
                    ("pageSize", "5"),
                    ("days", "10"),
                    ("languageCode", "en"),
                    ("key", "K"),
                ]),
            ),
            (
                &FORECAST_HOURS,
                pairs(&[
                    ("location.latitude", "1"),
                    ("location.longitude", "1"),
                    ("unitsSystem", "METRIC"),
                    ("pageSize", "24"),
                    ("hours", "240"),
                    ("languageCode", "en"),
                    ("key", "K"),
                ]),
            ),
            (
                &GET_HOURLY_WEATHER,
                pairs(&[
                    ("location.latitude", "1"),
                    ("location.longitude", "1"),
                    ("unitsSystem", "METRIC"),
                    ("pageSize", "24"),
                    ("hours", "24"),
                    ("languageCode", "en"),
                    ("key", "K"),
                ]),
            ),
            (
                &CURRENT_CONDITIONS,
                pairs(&[
                    ("location.latitude", "1"),
                    ("location.longitude", "1"),
                    ("unitsSystem", "METRIC"),
                    ("languageCode", "en"),
                    ("key", "K"),
                ]),
            ),
        ];

        assert_eq!(cases.len(), all().len());
        for (descriptor, expected) in cases {
            assert_eq!(required_only(descriptor), expected, "{}", descriptor.name);
        }
    }

    #[test]
    fn test_only_weather_sends_content_type() {
        for descriptor in all() {
            let is_weather = descriptor.path.starts_with("/v1/forecast")
                || descriptor.path.starts_with("/v1/history")
                || descriptor.path.starts_with("/v1/currentConditions");
            let expected = if is_weather {
                HeaderPolicy::ContentTypeJson
            } else {
                HeaderPolicy::AcceptJson
            };
            assert_eq!(descriptor.headers, expected, "{}", descriptor.name);
        }
    }
}
