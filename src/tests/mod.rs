mod fee_settlement_scenarios;
mod quote_fee_settlement;
