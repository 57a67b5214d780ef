//! CSV serialization of the loaded price series.
//!
//! Pure function of whatever is loaded at call time, not the played-back
//! prefix. Date labels are written as-is; embedded commas are not escaped.

use replay_core::TimeSeries;

/// Serialize `series` as `Date,Price` CSV, one row per point.
pub fn to_csv(series: &TimeSeries) -> String {
    let mut out = String::from("Date,Price\n");
    for (date, price) in series.dates().iter().zip(series.prices()) {
        out.push_str(date);
        out.push(',');
        out.push_str(&price.to_string());
        out.push('\n');
    }
    out
}

/// File name offered for the download of `symbol`'s data.
pub fn export_filename(symbol: &str) -> String {
    format!("{symbol}_stock_data.csv")
}
