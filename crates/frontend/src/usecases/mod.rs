pub mod u501_print_labels;
