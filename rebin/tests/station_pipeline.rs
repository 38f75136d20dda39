use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use rebin::{Rebin, RebinError};
use rebin_station::StationSource;
use rebin_station::adapter::DailyHistory;

/// One canned day of station history, raw export format.
struct OneDay;

#[async_trait]
impl DailyHistory for OneDay {
    async fn fetch_csv(&self, _station_id: &str, _date: NaiveDate) -> Result<String, RebinError> {
        // 2018-06-29 00:00:00 UTC = 1530230400.
        Ok("\
Time,TemperatureF,DewpointF,PressureIn,Humidity,DateUTC<br>
2018-06-29 00:10:00,50.0,48.0,29.92,80,2018-06-29 07:10:00<br>
<br>
2018-06-29 00:30:00,68.0,50.0,29.95,78,2018-06-29 07:30:00<br>
<br>
2018-06-29 01:10:00,86.0,52.0,30.00,75,2018-06-29 08:10:00<br>
<br>
"
        .to_owned())
    }
}

#[tokio::test]
async fn station_history_bins_onto_the_hour_grid() {
    let day = NaiveDate::from_ymd_opt(2018, 6, 29).unwrap();
    let source = StationSource::with_adapter(Arc::new(OneDay), "KCABERKE105", day, day);

    let start = 1_530_230_400; // 2018-06-29 00:00:00 UTC
    let rebin = Rebin::builder()
        .start_time(start)
        .interval(3_600)
        .end_time(start + 2 * 3_600)
        .build()
        .unwrap();

    let rows = rebin.bin_source(&source, "Temperature").await.unwrap();
    assert_eq!(rows.len(), 2);
    // First hour averages 50°F and 68°F readings, converted: (10 + 20) / 2.
    assert_eq!(rows[0].unix_time, start);
    assert!((rows[0].value - 15.0).abs() < 1e-9);
    // Second hour holds the 86°F reading: 30°C.
    assert_eq!(rows[1].unix_time, start + 3_600);
    assert!((rows[1].value - 30.0).abs() < 1e-9);
}
