pub mod ticket_price;
