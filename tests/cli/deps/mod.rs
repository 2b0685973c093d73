mod lists_catalog_contract;
