pub mod verify_okd_featuregates;
