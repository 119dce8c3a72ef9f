use crate::clients::nager::PublicHoliday;
use crate::state::AppState;

/// Fetches the configured holiday list and decodes it into typed records.
pub async fn fetch_holidays(state: &AppState) -> anyhow::Result<Vec<PublicHoliday>> {
    let payload = state.holidays.list().await?;
    Ok(serde_json::from_value(payload)?)
}

pub async fn cmd_holidays(state: &AppState) -> anyhow::Result<()> {
    let holidays = fetch_holidays(state).await?;

    if holidays.is_empty() {
        println!("No holidays returned.");
        return Ok(());
    }

    println!(
        "Public holidays for {} {} ({} total)",
        state.holidays.country_code(),
        state.holidays.year(),
        holidays.len()
    );
    println!("{:-<60}", "");

    for holiday in holidays {
        println!("{}  {}", holiday.date, holiday.name);
        if let Some(local) = holiday.local_name.as_deref().filter(|l| *l != holiday.name) {
            println!("            {}", local);
        }
    }

    Ok(())
}
