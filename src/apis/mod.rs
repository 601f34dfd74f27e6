pub mod easy_capacitance;
