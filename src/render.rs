use analytics::{Statistics, WinLossDistribution};
use comfy_table::{ContentArrangement, Table};
use core_types::TradeRecord;

/// Headline metrics of the dashboard. The reward/risk ratio is deliberately
/// left out, as on the original dashboard.
pub fn summary_table(stats: &Statistics) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Total trades".to_string(), stats.total_trades.to_string()]);
    table.add_row(vec!["Total P&L".to_string(), format!("${:.2}", stats.total_pnl)]);
    table.add_row(vec!["Win Rate".to_string(), format!("{:.2}%", stats.win_rate)]);
    table.add_row(vec!["Avg Profit".to_string(), format!("${:.2}", stats.avg_profit)]);
    table.add_row(vec!["Avg Loss".to_string(), format!("${:.2}", stats.avg_loss)]);
    table
}

pub fn distribution_table(distribution: &WinLossDistribution) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Result", "Count"]);
    table.add_row(vec!["Wins".to_string(), distribution.wins.to_string()]);
    table.add_row(vec!["Losses".to_string(), distribution.losses.to_string()]);
    table
}

/// One row per trade, in the order given.
pub fn trade_log_table(trades: &[TradeRecord]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Date",
        "Instrument",
        "Trade Name",
        "Position",
        "Entry",
        "Exit",
        "TP",
        "SL",
        "Strategy",
        "Result",
        "P&L",
        "P&L (%)",
        "Rationale",
        "Narrative",
    ]);

    for trade in trades {
        table.add_row(vec![
            trade.date.to_string(),
            trade.instrument.to_string(),
            trade.name.clone(),
            trade.side.to_string(),
            trade.entry_price.to_string(),
            trade.exit_price.to_string(),
            trade.take_profit.to_string(),
            trade.stop_loss.to_string(),
            trade.strategy_name.clone(),
            trade.outcome.to_string(),
            format!("${:.2}", trade.pnl_absolute),
            format!("{:.2}%", trade.pnl_percent),
            trade.rationale.clone(),
            trade.narrative.clone(),
        ]);
    }

    table
}
