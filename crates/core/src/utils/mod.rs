pub mod money_utils;
