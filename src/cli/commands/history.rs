use crate::constants::formats;
use crate::constants::limits::HISTORY_LIMIT;
use crate::state::AppState;

/// Caps the requested row count at the history limit the web view uses.
#[must_use]
pub fn effective_limit(requested: u64) -> u64 {
    requested.min(HISTORY_LIMIT)
}

pub async fn cmd_history(state: &AppState, limit: u64) -> anyhow::Result<()> {
    let records = state.store.recent_searches(effective_limit(limit)).await?;

    if records.is_empty() {
        println!("No searches recorded.");
        return Ok(());
    }

    println!("Recent Searches (last {}):", records.len());
    println!("{:-<70}", "");

    for record in records {
        let name = record.holiday_name.as_deref().unwrap_or("(unnamed)");
        println!("• {} - {} ({} days)", name, record.holiday_date, record.days_until);
        println!("  Searched: {}", record.searched_at.format(formats::SEARCHED_AT));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit_clamps() {
        assert_eq!(effective_limit(0), 0);
        assert_eq!(effective_limit(10), 10);
        assert_eq!(effective_limit(HISTORY_LIMIT), HISTORY_LIMIT);
        assert_eq!(effective_limit(500), HISTORY_LIMIT);
        assert_eq!(effective_limit(u64::MAX), HISTORY_LIMIT);
    }
}
