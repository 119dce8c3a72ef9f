use crate::state::AppState;

pub async fn cmd_countdown(state: &AppState, name: &str, date: &str) -> anyhow::Result<()> {
    let calc = state
        .calculator
        .calculate(Some(name.to_string()), Some(date.to_string()))
        .await?;

    match calc.days_until {
        0 => println!("{} is today!", name),
        n if n > 0 => println!("{} days until {} ({})", n, name, calc.holiday_date),
        n => println!("{} was {} days ago ({})", name, -n, calc.holiday_date),
    }

    if calc.record_id.is_none() {
        println!("(search log unavailable, not recorded)");
    }

    Ok(())
}
