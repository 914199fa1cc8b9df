pub mod call_data;
