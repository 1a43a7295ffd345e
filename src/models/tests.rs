use super::{MerchantCategory, Transaction};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::types::{timestamp, CardType, Currency};

fn create_transaction(transaction_id: u32, amount: &str, is_fraud: bool) -> Result<Transaction> {
    Ok(Transaction {
        transaction_id,
        timestamp: timestamp::parse("2024-06-01 03:15:42")?,
        amount: Decimal::from_str(amount)?,
        currency: Currency::Eur,
        merchant_name: "WebShopX_512".to_string(),
        merchant_category: MerchantCategory::OnlineRetail,
        card_type: CardType::Amex,
        location_city: "Lagos".to_string(),
        location_country: "Nigeria".to_string(),
        latitude: 6.5244,
        longitude: 3.3792,
        is_fraud
    })
}

fn serialize_to_string(transactions: &[Transaction]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for transaction in transactions {
        writer.serialize(transaction)?;
    }

    let bytes = writer.into_inner().map_err(|error| anyhow!("{error}"))?;

    Ok(String::from_utf8(bytes)?)
}

#[test]
fn test_transaction_serializes_dataset_columns_in_order() -> Result<()> {
    let output = serialize_to_string(&[create_transaction(7, "1234.56", true)?])?;
    let mut lines = output.lines();

    assert_eq!(
        lines.next(),
        Some("transaction_id,timestamp,amount,currency,merchant_name,merchant_category,card_type,location_city,location_country,latitude,longitude,is_fraud")
    );
    assert_eq!(
        lines.next(),
        Some("7,2024-06-01 03:15:42,1234.56,EUR,WebShopX_512,Online Retail,Amex,Lagos,Nigeria,6.5244,3.3792,1")
    );

    Ok(())
}

#[test]
fn test_transaction_deserializes_from_dataset_row() -> Result<()> {
    let csv_content = "transaction_id,timestamp,amount,currency,merchant_name,merchant_category,card_type,location_city,location_country,latitude,longitude,is_fraud\n\
                       3,2024-06-01 03:15:42,18.40,EUR,SuperMart_101,Groceries,Visa,Dublin,Ireland,53.3498,-6.2603,0\n";

    let mut reader = csv::Reader::from_reader(csv_content.as_bytes());
    let transaction: Transaction = reader.deserialize().next().ok_or_else(|| anyhow!("Row missing"))??;

    assert_eq!(transaction.transaction_id, 3);
    assert_eq!(transaction.amount, Decimal::from_str("18.40")?);
    assert_eq!(transaction.merchant_category, MerchantCategory::Groceries);
    assert_eq!(transaction.card_type, CardType::Visa);
    assert!(!transaction.is_fraud);
    assert_eq!(transaction.label(), 0);

    Ok(())
}

#[test]
fn test_invalid_fraud_flag_is_rejected() {
    let csv_content = "transaction_id,timestamp,amount,currency,merchant_name,merchant_category,card_type,location_city,location_country,latitude,longitude,is_fraud\n\
                       3,2024-06-01 03:15:42,18.40,EUR,SuperMart_101,Groceries,Visa,Dublin,Ireland,53.3498,-6.2603,maybe\n";

    let mut reader = csv::Reader::from_reader(csv_content.as_bytes());
    let result: Option<Result<Transaction, csv::Error>> = reader.deserialize().next();

    assert!(matches!(result, Some(Err(_))));
}

#[test]
fn test_merchant_category_names_match_serialized_form() -> Result<()> {
    for category in MerchantCategory::ALL {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
        writer.serialize(category)?;
        let bytes = writer.into_inner().map_err(|error| anyhow!("{error}"))?;

        assert_eq!(String::from_utf8(bytes)?.trim_end(), category.as_str());
    }

    Ok(())
}

#[test]
fn test_amount_is_written_with_two_decimal_places() -> Result<()> {
    let output = serialize_to_string(&[create_transaction(8, "19.5", false)?])?;

    assert!(output.lines().nth(1).is_some_and(|row| row.contains(",19.50,EUR,")));

    Ok(())
}
