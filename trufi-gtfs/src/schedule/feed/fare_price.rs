use crate::{schedule::time::compile_pattern, GtfsBuildError};
use regex::Regex;
use trufi_osm::model::route::RouteFeature;

/// GTFS `payment_method`: 0 pays on board, 1 pays before boarding.
const PAYMENT_METHOD_TAG: &str = "paymentMethod";

/// derives a route's fare from its `fee`, `charge` and `paymentMethod` tags.
#[derive(Debug, Clone)]
pub struct FarePricer {
    leading_decimal: Regex,
}

impl FarePricer {
    pub fn new() -> Result<FarePricer, GtfsBuildError> {
        Ok(FarePricer {
            leading_decimal: compile_pattern(r"^[+-]?(\d+(\.\d*)?|\.\d+)")?,
        })
    }

    /// the fare as written in `charge` when `fee=yes`, otherwise `"0"`. only
    /// the leading decimal of the charge is kept, so `"2.50 BOB"` prices at
    /// `"2.50"`.
    pub fn price(&self, route: &RouteFeature) -> String {
        if route.tag("fee") != Some("yes") {
            return String::from("0");
        }
        let charge = route.tag("charge").unwrap_or_default().trim();
        match self.leading_decimal.find(charge) {
            Some(m) => String::from(m.as_str()),
            None => {
                log::warn!(
                    "route {} has fee=yes but no numeric charge ('{charge}'), pricing at 0",
                    route.id
                );
                String::from("0")
            }
        }
    }

    /// the route's `paymentMethod` tag when it holds a GTFS payment method,
    /// otherwise 0.
    pub fn payment_method(&self, route: &RouteFeature) -> u8 {
        match route.tag(PAYMENT_METHOD_TAG).map(|v| v.trim().parse::<u8>()) {
            None => 0,
            Some(Ok(method)) if method <= 1 => method,
            Some(_) => {
                log::warn!(
                    "route {} has unsupported {PAYMENT_METHOD_TAG} '{}', using 0",
                    route.id,
                    route.tag(PAYMENT_METHOD_TAG).unwrap_or_default()
                );
                0
            }
        }
    }
}
