mod generate_single_contract;
