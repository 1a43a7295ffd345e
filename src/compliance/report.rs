use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::compliance::ScreenedTransaction;
use crate::types::timestamp;

pub fn generate_report<W: Write>(writer: &mut W, flagged: &[ScreenedTransaction], generated_at: NaiveDateTime) -> io::Result<()> {
    writeln!(writer, "--- Fraud Detection Report ---")?;
    writeln!(writer, "Report generated on: {}", generated_at.format(timestamp::FORMAT))?;
    writeln!(writer, "\nTotal flagged transactions: {}", flagged.len())?;
    writeln!(writer, "---------------------------------")?;

    if flagged.is_empty() {
        writeln!(writer, "\nNo suspicious transactions detected.")?;
        return Ok(());
    }

    writeln!(writer, "\nFlagged Transactions:\n")?;

    for screened in flagged {
        let transaction = &screened.transaction;

        writeln!(writer, "  Transaction ID: {}", transaction.transaction_id)?;
        writeln!(writer, "  Timestamp: {}", transaction.formatted_timestamp())?;
        writeln!(writer, "  Amount: {} {}", transaction.amount, transaction.currency)?;
        writeln!(writer, "  Merchant: {}", transaction.merchant_name)?;
        writeln!(writer, "  Action Taken: {}", screened.action_taken)?;
        writeln!(writer, "  --------------------")?;
    }

    Ok(())
}
