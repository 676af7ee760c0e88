use std::str::FromStr;

use rust_decimal::Decimal;

use ibflat::ledger::io::ledger_csv::write_ledger_csv;
use ibflat::statement::parse::{StatementParseOptions, StatementParser};
use ibflat::testlib::assert_vec_eq;
use ibflat::util::rw::{DescribedReader, StringBuffer, WriteHandle};

const SAMPLE_STATEMENT: &str = "\
Statement,Header,Field Name,Field Value
Statement,Data,BrokerName,Test Broker
Statement,Data,Period,\"June 1, 2024 - June 28, 2024\"
Trades,Header,DataDiscriminator,Asset Category,Currency,Symbol,Date/Time,Quantity,Proceeds,Comm/Fee
Trades,Data,Order,Stocks,USD,ABC,\"2024-06-03, 10:15:00\",10,-1000.50,-1
Trades,Data,Order,Stocks,USD,DEF,\"2024-06-04, 09:30:00\",-5,750.25,-1.25
Trades,Total,,Stocks,USD,,,5,-250.25,-2.25
Trades,Header,DataDiscriminator,Asset Category,Currency,Symbol,Quantity,Proceeds,Comm in USD
Trades,SubTotal,,Forex,USD,EUR.USD,-915.75,1000,-2
Deposits & Withdrawals,Header,Currency,Settle Date,Description,Amount
Deposits & Withdrawals,Data,USD,2024-06-05,Wire deposit,5000
Deposits & Withdrawals,Data,USD,2024-06-20,Wire out,-1200.75
Dividends,Header,Currency,Date,Description,Amount
Dividends,Data,USD,2024-06-10,ABC(US0000000001) Cash Dividend USD 0.50 per Share,5
Withholding Tax,Header,Currency,Date,Description,Amount
Withholding Tax,Data,USD,2024-06-10,ABC(US0000000001) Cash Dividend - US Tax,-0.75
Commission Adjustments,Header,Currency,Date,Description,Amount
Commission Adjustments,Data,USD,2024-06-03,Commission rebill (ABC),-0.5
";

fn flatten_to_csv(statement: &str) -> (String, String) {
    let desc_reader = DescribedReader::from_string(
        "statement.csv".to_string(),
        statement.to_string(),
    );
    let (err_stream, err_buff) = WriteHandle::string_buff_write_handle();
    let parser =
        StatementParser::new(&StatementParseOptions::default(), err_stream);
    let txs = parser.parse(&desc_reader).unwrap();

    let mut out = StringBuffer::new();
    write_ledger_csv(&txs, &mut out).unwrap();

    let err_str = err_buff.borrow().as_str().to_string();
    (out.as_str().to_string(), err_str)
}

#[test]
fn test_flatten_full_statement() {
    let (output, errs) = flatten_to_csv(SAMPLE_STATEMENT);
    assert_eq!(errs, "");

    assert_vec_eq(
        output.lines().map(|l| l.to_string()).collect::<Vec<String>>(),
        vec![
            "Date,Account,Type,Instrument Type,Ticker Symbol,Quantity,Amount,\
             Currency,Fees,Fees Currency,Taxes,Taxes Currency,Converted,\
             Converted Currency"
                .to_string(),
            // All trades first, then forexes, cashes and dividends.
            "2024-06-03 10:15:00,IBKR,BUY,SECURITY,ABC,10,1000.50,USD,1.5,USD,,,,"
                .to_string(),
            "2024-06-04 09:30:00,IBKR,SELL,SECURITY,DEF,5,750.25,USD,1.25,USD,,,,"
                .to_string(),
            "2024-06-28 00:00:00,IBKR,CONVERSION,,,,1000,USD,2,USD,,,-915.75,EUR"
                .to_string(),
            "2024-06-05,IBKR,DEPOSIT,,,,5000,USD,,,,,,".to_string(),
            "2024-06-20,IBKR,WITHDRAWAL,,,,1200.75,USD,,,,,,".to_string(),
            "2024-06-10,IBKR,DIVIDEND,SECURITY,ABC,,5,USD,,,0.75,USD,,"
                .to_string(),
        ],
    );
}

#[test]
fn test_flatten_decimal_round_trip() {
    let (output, _) = flatten_to_csv(SAMPLE_STATEMENT);

    // Values written to the ledger reparse to exactly the statement's
    // decimals; scale survives the whole pipeline.
    let buy_row: Vec<&str> =
        output.lines().nth(1).unwrap().split(',').collect();
    assert_eq!(
        Decimal::from_str(buy_row[6]).unwrap(),
        Decimal::from_str("-1000.50").unwrap().abs()
    );
    assert_eq!(buy_row[6], "1000.50");
}

#[test]
fn test_flatten_with_row_level_failures() {
    let statement = "\
Trades,Header,DataDiscriminator,Asset Category,Currency,Symbol,Date/Time,Quantity,Proceeds,Comm/Fee
Trades,Data,Order,Stocks,USD,ABC,not-a-date,10,-1000,-1
Trades,Data,Order,Stocks,USD,DEF,\"2024-06-04, 09:30:00\",-5,750.25,-1.25
Withholding Tax,Header,Currency,Date,Description,Amount
Withholding Tax,Data,USD,2024-06-10,GHI(US0000000002) Tax,-0.75
";
    let (output, errs) = flatten_to_csv(statement);

    // The pass completes and emits what was successfully built.
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("2024-06-04 09:30:00,IBKR,SELL"), "{}", lines[1]);

    // Both failures surface as warnings with the offending rows.
    assert!(errs.contains("Warning: Row 2"), "{}", errs);
    assert!(errs.contains("not-a-date"), "{}", errs);
    assert!(errs.contains("No dividend matched"), "{}", errs);
}
