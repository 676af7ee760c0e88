pub mod ledger_csv;
