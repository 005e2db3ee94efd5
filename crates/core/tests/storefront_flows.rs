//! End-to-end storefront flows against the scripted driver.
//!
//! Each test scripts the page reactions the real storefront exhibits
//! (submit navigates to inventory, add swaps the add control for a
//! remove control and grows the cart) and then runs the built-in
//! scenarios unchanged.

use cartwright::scenarios::{
	AddToCartScenario, InvalidLoginScenario, LoginScenario, RemoveFromCartScenario, default_products,
};
use cartwright::testing::{MockConnector, MockDriver, MockEffect};
use cartwright::{
	AppConfig, ApplicationManager, HarnessError, Locator, ProductRef, Scenario, ScenarioStatus, run_suite,
};

const INVENTORY_URL: &str = "https://www.saucedemo.com/inventory.html";

fn cart_item() -> Locator {
	Locator::css(".cart_item")
}

fn login_button() -> Locator {
	Locator::data_test("login-button")
}

/// Scripts the login page controls.
fn script_login_form(driver: &MockDriver) {
	driver.set_count(&Locator::data_test("username"), 1);
	driver.set_count(&Locator::data_test("password"), 1);
	driver.set_count(&login_button(), 1);
}

/// Scripts a submit that the storefront accepts.
fn script_accepting_login(driver: &MockDriver) {
	script_login_form(driver);
	driver.on_click(&login_button(), vec![MockEffect::SetUrl(INVENTORY_URL.into())]);
}

/// Scripts a submit the storefront rejects with an error banner.
fn script_rejecting_login(driver: &MockDriver) {
	script_login_form(driver);
	driver.on_click(
		&login_button(),
		vec![MockEffect::AdjustCount { locator: Locator::data_test("error"), delta: 1 }],
	);
}

/// Scripts a product listing with add/remove control swapping.
fn script_product(driver: &MockDriver, product: &ProductRef) {
	let add = product.add_to_cart_locator();
	let remove = product.remove_locator();
	driver.set_count(&add, 1);
	driver.on_click(
		&add,
		vec![
			MockEffect::AdjustCount { locator: cart_item(), delta: 1 },
			MockEffect::AdjustCount { locator: remove.clone(), delta: 1 },
			MockEffect::RemoveTarget,
		],
	);
	driver.on_click(
		&remove,
		vec![
			MockEffect::AdjustCount { locator: cart_item(), delta: -1 },
			MockEffect::AdjustCount { locator: add, delta: 1 },
			MockEffect::RemoveTarget,
		],
	);
}

fn script_storefront(driver: &MockDriver) {
	script_accepting_login(driver);
	driver.set_count(&Locator::data_test("shopping-cart-link"), 1);
	for product in default_products() {
		script_product(driver, &product);
	}
}

fn manager_for(driver: &MockDriver) -> impl Fn() -> ApplicationManager + '_ {
	move || ApplicationManager::with_connector(AppConfig::default(), Box::new(MockConnector::new(driver.clone())))
}

#[tokio::test]
async fn valid_login_scenario_passes() {
	let driver = MockDriver::new();
	script_accepting_login(&driver);

	let suite: Vec<Box<dyn Scenario>> = vec![Box::new(LoginScenario::default())];
	let report = run_suite(&suite, manager_for(&driver)).await;
	assert!(report.is_success(), "{:?}", report.outcomes);
}

#[tokio::test]
async fn invalid_login_scenario_detects_rejection() {
	let driver = MockDriver::new();
	script_rejecting_login(&driver);

	let suite: Vec<Box<dyn Scenario>> = vec![Box::new(InvalidLoginScenario::default())];
	let report = run_suite(&suite, manager_for(&driver)).await;
	assert!(report.is_success(), "{:?}", report.outcomes);
}

#[tokio::test]
async fn invalid_login_scenario_never_false_passes() {
	// A storefront that wrongly accepts the bad credential must fail
	// the scenario, not pass it.
	let driver = MockDriver::new();
	script_accepting_login(&driver);

	let suite: Vec<Box<dyn Scenario>> = vec![Box::new(InvalidLoginScenario::default())];
	let report = run_suite(&suite, manager_for(&driver)).await;
	assert_eq!(report.failed(), 1);
	let ScenarioStatus::Failed(reason) = &report.outcomes[0].status else {
		panic!("expected failure");
	};
	assert!(reason.contains("must not reach inventory"), "{reason}");
}

#[tokio::test]
async fn adding_two_products_yields_two_cart_rows() {
	let driver = MockDriver::new();
	script_storefront(&driver);

	let suite: Vec<Box<dyn Scenario>> = vec![Box::new(AddToCartScenario::default())];
	let report = run_suite(&suite, manager_for(&driver)).await;
	assert!(report.is_success(), "{:?}", report.outcomes);
	assert_eq!(driver.count(&cart_item()), 2);
}

#[tokio::test]
async fn removing_all_products_empties_the_cart() {
	let driver = MockDriver::new();
	script_storefront(&driver);

	let suite: Vec<Box<dyn Scenario>> = vec![Box::new(RemoveFromCartScenario::default())];
	let report = run_suite(&suite, manager_for(&driver)).await;
	assert!(report.is_success(), "{:?}", report.outcomes);
	assert_eq!(driver.count(&cart_item()), 0);
}

#[tokio::test]
async fn full_suite_isolates_failures_and_always_tears_down() {
	// Only the login form is scripted; the cart scenarios fail on the
	// missing product controls while the login scenario passes.
	let driver = MockDriver::new();
	script_accepting_login(&driver);

	let suite: Vec<Box<dyn Scenario>> = vec![
		Box::new(LoginScenario::default()),
		Box::new(AddToCartScenario::default()),
		Box::new(RemoveFromCartScenario::default()),
	];
	let report = run_suite(&suite, manager_for(&driver)).await;

	assert_eq!(report.passed(), 1);
	assert_eq!(report.failed(), 2);
	// Every scenario got a session and every session was released.
	assert_eq!(driver.close_count(), 3);
	for outcome in &report.outcomes[1..] {
		let ScenarioStatus::Failed(reason) = &outcome.status else {
			panic!("expected failure");
		};
		assert!(reason.contains("element not found"), "{reason}");
	}
}

#[tokio::test]
async fn hung_interaction_surfaces_as_timeout() {
	let driver = MockDriver::new();
	script_login_form(&driver);
	driver.on_click(&login_button(), vec![MockEffect::Hang]);

	let config = AppConfig {
		wait_budget_ms: 50,
		..AppConfig::default()
	};
	let mut app = ApplicationManager::with_connector(config, Box::new(MockConnector::new(driver.clone())));
	app.start().await.unwrap();

	let scenario = LoginScenario::default();
	let err = scenario.run(&app).await.unwrap_err();
	assert!(matches!(err, HarnessError::Timeout { .. }), "{err}");

	// Teardown still releases the hung session.
	app.stop().await;
	assert_eq!(driver.close_count(), 1);
}

#[tokio::test]
async fn duplicate_add_policy_is_an_error() {
	let driver = MockDriver::new();
	script_accepting_login(&driver);
	let products = default_products();
	script_product(&driver, &products[0]);
	driver.set_count(&Locator::data_test("shopping-cart-link"), 1);

	// Same product requested twice: the second add must error because
	// the control was swapped out after the first.
	let scenario = AddToCartScenario::new(
		cartwright::scenarios::standard_credential(),
		vec![products[0].clone(), products[0].clone()],
	);
	let suite: Vec<Box<dyn Scenario>> = vec![Box::new(scenario)];
	let report = run_suite(&suite, manager_for(&driver)).await;

	assert_eq!(report.failed(), 1);
	assert_eq!(driver.count(&cart_item()), 1);
}
