use std::collections::HashMap;

use crate::model::{GuestArrival, GuestDeparture, MovesSummary, StayingGuest};

/// Inner join of departures and arrivals on exact `name`.
///
/// Departures drive the traversal; for each one every arrival with the same
/// name is emitted in arrival order, so repeated names produce the cross
/// product. The result is then stably sorted by `site_leaving`.
pub fn match_guests(arrivals: &[GuestArrival], departures: &[GuestDeparture]) -> Vec<StayingGuest> {
    let mut by_name: HashMap<&str, Vec<&GuestArrival>> = HashMap::with_capacity(arrivals.len());
    for arrival in arrivals {
        by_name.entry(arrival.name.as_str()).or_default().push(arrival);
    }

    let mut staying = Vec::new();
    for departure in departures {
        let Some(matches) = by_name.get(departure.name.as_str()) else {
            continue;
        };
        for arrival in matches {
            staying.push(StayingGuest {
                name: departure.name.clone(),
                site_leaving: departure.site_leaving.clone(),
                site_arriving: arrival.site_arriving.clone(),
            });
        }
    }

    // `sort_by` is stable: ties keep traversal order.
    staying.sort_by(|a, b| a.site_leaving.cmp(&b.site_leaving));

    log::debug!(
        "matched {} staying guests from {} departures and {} arrivals",
        staying.len(),
        departures.len(),
        arrivals.len()
    );
    staying
}

pub fn summarize(
    arrivals: &[GuestArrival],
    departures: &[GuestDeparture],
    staying: &[StayingGuest],
) -> MovesSummary {
    MovesSummary {
        arrivals: arrivals.len(),
        departures: departures.len(),
        staying: staying.len(),
    }
}
