/// Bundled sample ledger: a year of salaries and bills for a handful of
/// parties, used to pre-populate a service for demos. Every line must pass
/// the entry validation; a malformed line here is a bug in this file.
pub const SAMPLE_LEDGER: &str = "\
2017-01-01,IBM,Alex,5000.00
2017-02-01,IBM,Alex,5000.00
2017-03-01,IBM,Alex,5000.00
2017-04-01,IBM,Alex,5000.00
2017-05-01,IBM,Alex,5000.00
2017-06-01,IBM,Alex,5000.00
2017-07-01,IBM,Alex,5000.00
2017-08-01,IBM,Alex,5000.00
2017-09-01,IBM,Alex,5000.00
2017-10-01,IBM,Alex,5000.00
2017-01-01,Alex,Tuition,750.00
2017-02-01,Alex,Tuition,750.00
2017-03-01,Alex,Tuition,750.00
2017-04-01,Alex,Tuition,750.00
2017-05-01,Alex,Tuition,750.00
2017-06-01,Alex,Tuition,750.00
2017-07-01,Alex,Tuition,750.00
2017-08-01,Alex,Tuition,750.00
2017-09-01,Alex,Tuition,750.00
2017-10-01,Alex,Tuition,750.00
2017-01-01,Dell Inc.,John Smith,5000.00
2017-02-01,Dell Inc.,John Smith,5000.00
2017-03-01,Dell Inc.,John Smith,5000.00
2017-04-01,Dell Inc.,John Smith,5000.00
2017-05-01,Dell Inc.,John Smith,5000.00
2017-06-01,Dell Inc.,John Smith,5000.00
2017-07-01,Dell Inc.,John Smith,5000.00
2017-08-01,Dell Inc.,John Smith,5000.00
2017-09-01,Dell Inc.,John Smith,5000.00
2017-10-01,Dell Inc.,John Smith,5000.00
2017-01-01,Toyota,Mary Moore,3333.00
2017-01-15,Toyota,Mary Moore,3333.00
2017-02-01,Toyota,Mary Moore,3333.00
2017-02-15,Toyota,Mary Moore,3333.00
2017-03-01,Toyota,Mary Moore,3333.00
2017-03-15,Toyota,Mary Moore,3333.00
2017-04-01,Toyota,Mary Moore,3333.00
2017-04-15,Toyota,Mary Moore,3333.00
2017-05-01,Toyota,Mary Moore,3333.00
2017-05-15,Toyota,Mary Moore,3333.00
2017-06-01,Toyota,Mary Moore,3333.00
2017-06-15,Toyota,Mary Moore,3333.00
2017-07-01,Toyota,Mary Moore,3333.00
2017-07-15,Toyota,Mary Moore,3333.00
2017-08-01,Toyota,Mary Moore,3333.00
2017-08-15,Toyota,Mary Moore,3333.00
2017-09-01,Toyota,Mary Moore,3333.00
2017-09-15,Toyota,Mary Moore,3333.00
2017-10-01,Toyota,Mary Moore,3333.00
2017-10-15,Toyota,Mary Moore,3333.00
2017-01-02,John Smith,Daycare,1250.00
2017-01-05,John Smith,State Farm,437.25
2017-01-10,John Smith,US Bank,2215.35
2017-01-10,John Smith,Mary Moore,130.00
2017-01-20,John Smith,Capitol One Auto,387.45
2017-01-25,John Smith,Eddies Supermarket,1422.98
2017-02-02,John Smith,Daycare,1250.00
2017-02-05,John Smith,State Farm,437.25
2017-02-06,John Smith,Texaco,73.13
2017-02-10,John Smith,US Bank,2215.35
2017-02-20,John Smith,Capitol One Auto,387.45
2017-02-25,John Smith,Costco,870.00
2017-03-02,John Smith,Daycare,1250.00
2017-03-05,John Smith,State Farm,437.25
2017-03-10,John Smith,US Bank,2215.35
2017-03-20,John Smith,Capitol One Auto,387.45
2017-03-25,John Smith,Whole Foods,572.65
2017-04-02,John Smith,Daycare,1250.00
2017-04-05,John Smith,State Farm,437.25
2017-04-10,John Smith,US Bank,2215.35
2017-04-13,John Smith,Texaco,72.52
2017-04-20,John Smith,Capitol One Auto,387.45
2017-04-25,John Smith,Eddies Supermarket,933.32
2017-05-02,John Smith,Daycare,1250.00
2017-05-05,John Smith,State Farm,437.25
2017-05-10,John Smith,US Bank,2215.35
2017-05-16,John Smith,Mary Moore,220.00
2017-05-20,John Smith,Capitol One Auto,387.45
2017-05-25,John Smith,Winco,642.68
2017-06-02,John Smith,Daycare,1250.00
2017-06-05,John Smith,State Farm,437.25
2017-06-10,John Smith,US Bank,2215.35
2017-06-20,John Smith,Capitol One Auto,387.45
2017-06-25,John Smith,Eddies Supermarket,182.31
2017-06-26,John Smith,Texaco,66.31
2017-07-02,John Smith,Daycare,1250.00
2017-07-05,John Smith,State Farm,437.25
2017-07-10,John Smith,US Bank,2215.35
2017-07-20,John Smith,Capitol One Auto,387.45
2017-07-25,John Smith,Costco,1351.68
2017-08-02,John Smith,Daycare,1250.00
2017-08-05,John Smith,State Farm,437.25
2017-08-10,John Smith,US Bank,2215.35
2017-08-16,John Smith,Texaco,65.14
2017-08-20,John Smith,Capitol One Auto,387.45
2017-08-25,John Smith,Whole Foods,725.44
2017-09-02,John Smith,Daycare,1250.00
2017-09-05,John Smith,State Farm,437.25
2017-09-06,John Smith,Mary Moore,90.00
2017-09-10,John Smith,US Bank,2215.35
2017-09-20,John Smith,Capitol One Auto,387.45
2017-09-25,John Smith,Eddies Supermarket,1352.98
2017-10-02,John Smith,Daycare,1250.00
2017-10-03,John Smith,Texaco,71.29
2017-10-05,John Smith,State Farm,437.25
2017-10-10,John Smith,US Bank,2215.35
2017-10-20,John Smith,Capitol One Auto,387.45
2017-10-25,John Smith,Winco,1532.67
2017-01-02,Mary Moore,Petcare,480.00
2017-01-05,Mary Moore,Geico,268.58
2017-01-19,Mary Moore,Northwest Auto,635.85
2017-01-20,Mary Moore,HR Rent,1825.65
2017-01-28,Mary Moore,Acme Supermarket,678.22
2017-02-02,Mary Moore,Petcare,480.00
2017-02-05,Mary Moore,Geico,268.58
2017-02-19,Mary Moore,Northwest Auto,635.85
2017-02-20,Mary Moore,HR Rent,1825.65
2017-02-28,Mary Moore,Acme Supermarket,678.22
2017-03-02,Mary Moore,Petcare,480.00
2017-03-05,Mary Moore,Geico,268.58
2017-03-19,Mary Moore,Northwest Auto,635.85
2017-03-20,Mary Moore,HR Rent,1825.65
2017-03-28,Mary Moore,Acme Supermarket,678.22
2017-04-02,Mary Moore,Petcare,480.00
2017-04-05,Mary Moore,Geico,268.58
2017-04-19,Mary Moore,Northwest Auto,635.85
2017-04-19,Mary Moore,John Smith,65.00
2017-04-20,Mary Moore,HR Rent,1825.65
2017-04-28,Mary Moore,Acme Supermarket,678.22
2017-05-02,Mary Moore,Petcare,480.00
2017-05-05,Mary Moore,Geico,268.58
2017-05-19,Mary Moore,Northwest Auto,635.85
2017-05-20,Mary Moore,HR Rent,1825.65
2017-05-28,Mary Moore,Acme Supermarket,678.22
2017-06-02,Mary Moore,Petcare,480.00
2017-06-05,Mary Moore,Geico,268.58
2017-06-19,Mary Moore,Northwest Auto,635.85
2017-06-20,Mary Moore,HR Rent,1825.65
2017-06-28,Mary Moore,Acme Supermarket,678.22
2017-07-02,Mary Moore,Petcare,480.00
2017-07-05,Mary Moore,Geico,268.58
2017-07-19,Mary Moore,Northwest Auto,635.85
2017-07-20,Mary Moore,HR Rent,1825.65
2017-07-28,Mary Moore,Acme Supermarket,678.22
2017-08-02,Mary Moore,Petcare,480.00
2017-08-05,Mary Moore,Geico,268.58
2017-08-19,Mary Moore,Northwest Auto,635.85
2017-08-20,Mary Moore,HR Rent,1825.65
2017-08-28,Mary Moore,Acme Supermarket,678.22
2017-09-02,Mary Moore,Petcare,480.00
2017-09-05,Mary Moore,Geico,268.58
2017-09-19,Mary Moore,Northwest Auto,635.85
2017-09-20,Mary Moore,HR Rent,1825.65
2017-09-28,Mary Moore,Acme Supermarket,678.22
2017-10-02,Mary Moore,Petcare,480.00
2017-10-05,Mary Moore,Geico,268.58
2017-10-19,Mary Moore,Northwest Auto,635.85
2017-10-20,Mary Moore,HR Rent,1825.65
2017-10-28,Mary Moore,Acme Supermarket,678.22";
