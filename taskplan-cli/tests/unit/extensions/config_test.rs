use super::*;
use crate::helpers::*;
use tempfile::TempDir;

fn parse_config(json: &str) -> GenericResult<Config> {
    read_config(BufReader::new(json.as_bytes()))
}

const AUTO_DATA: &str = r#"{ "type": "auto", "employees": 2, "tasks": 3 }"#;
const AUTO_POPULATION: &str = r#"{ "type": "auto", "size": 2 }"#;
const MATRICES_DATA: &str = r#"{ "type": "matrices" }"#;

fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}

#[test]
fn can_read_full_config() {
    let json = r#"{
        "generations": 200,
        "population": { "type": "fromFile", "path": "starting_population.json" },
        "operators": { "breed": "dominance-row-swap", "mutate": "fusion", "select": "age-capped" },
        "weights": { "alpha": 30, "beta": 1, "gamma": 3000, "delta": 20 },
        "budget": 40,
        "data": { "type": "generated", "employees": "people.json" },
        "saveMatrices": true,
        "seed": 42,
        "telemetry": { "logging": { "enabled": true, "logBest": 10 } }
    }"#;

    let config = parse_config(json).unwrap();

    assert_eq!(config.generations, 200);
    assert_eq!(config.budget, Some(40));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.save_matrices, Some(true));
    assert_eq!(config.operators.breed, "dominance-row-swap");
    assert_eq!(config.operators.mutate, "fusion");
    assert_eq!(config.operators.select, "age-capped");
    assert_eq!(create_weights(&config), Weights::new(30., 1., 3000., 20.));
    match &config.population {
        PopulationConfig::FromFile { path } => assert_eq!(path, "starting_population.json"),
        PopulationConfig::Auto { .. } => unreachable!(),
    }
    match &config.data {
        DataConfig::Generated { employees, tasks } => {
            assert_eq!(employees.as_deref(), Some("people.json"));
            assert_eq!(tasks.as_deref(), None);
        }
        _ => unreachable!(),
    }
    let logging = config.telemetry.and_then(|telemetry| telemetry.logging).expect("no logging config");
    assert!(logging.enabled);
    assert_eq!(logging.log_best, Some(10));
}

#[test]
fn can_use_default_weights_for_missing_ones() {
    let json = create_config_json(AUTO_DATA, AUTO_POPULATION, r#", "weights": { "gamma": 1 }"#);
    let config = parse_config(json.as_str()).unwrap();

    assert_eq!(create_weights(&config), Weights::new(10., 1., 1., 10.));
}

#[test]
fn can_fail_on_missing_required_field() {
    let json = r#"{ "generations": 1, "population": { "type": "auto", "size": 2 } }"#;

    let err = parse_config(json).err().expect("config must be rejected");

    assert!(err.to_string().starts_with("cannot deserialize config"));
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn can_fail_on_unknown_data_mode() {
    let json = create_config_json(r#"{ "type": "database" }"#, AUTO_POPULATION, "");

    assert!(parse_config(json.as_str()).is_err());
}

#[test]
fn can_fail_on_unknown_strategy_name() {
    let json = create_config_json(AUTO_DATA, AUTO_POPULATION, "");
    let mut config = parse_config(json.as_str()).unwrap();
    config.operators.mutate = "shuffle".to_string();

    let err = create_builder_from_config(&config, create_silent_logger()).err().expect("unknown strategy");

    assert!(err.to_string().starts_with("cannot find mutate strategy 'shuffle', try one of: swap, add"));
}

#[test]
fn can_fail_on_zero_generations_when_building() {
    let json = create_config_json(AUTO_DATA, AUTO_POPULATION, "");
    let mut config = parse_config(json.as_str()).unwrap();
    config.generations = 0;

    let result = create_builder_from_config(&config, create_silent_logger()).unwrap().build();

    assert_eq!(result.err().map(|err| err.to_string()), Some("amount of generations must be positive".to_string()));
}

#[test]
fn can_configure_logging_telemetry() {
    let json = create_config_json(AUTO_DATA, AUTO_POPULATION, r#", "telemetry": { "logging": { "enabled": true } }"#);
    let config = parse_config(json.as_str()).unwrap();

    let evolution_config = create_builder_from_config(&config, create_silent_logger()).unwrap().build().unwrap();

    assert_eq!(evolution_config.generations, 4);
    match evolution_config.telemetry {
        TelemetryMode::OnlyLogging { log_best, .. } => assert_eq!(log_best, LOG_BEST),
        TelemetryMode::None => unreachable!(),
    }
}

#[test]
fn can_load_matrices_from_files() {
    let dir = TempDir::new().unwrap();
    write_matrices(dir.path());
    let config = parse_config(create_matrices_config_json().as_str()).unwrap();

    let data = create_input_data(&config, dir.path(), &DefaultRandom::new_repeatable(0)).unwrap();

    assert_eq!(data.matrices.time, vec![vec![2, 4, 3, 5, 1], vec![3, 2, 4, 1, 5]]);
    assert_eq!(data.matrices.satisfaction, vec![vec![1, 9, 4, 2, 7], vec![8, 0, 5, 10, 2]]);
    assert_eq!(data.matrices.priority, vec![1, 10, 5, 0, 7]);
}

#[test]
fn can_report_missing_matrix_file() {
    let dir = TempDir::new().unwrap();
    let config = parse_config(create_matrices_config_json().as_str()).unwrap();

    let err = create_input_data(&config, dir.path(), &DefaultRandom::new_repeatable(0)).err().unwrap();

    assert!(err.to_string().starts_with("cannot open time matrix file"));
}

#[test]
fn can_predict_matrices_from_employees_and_tasks() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "employees.json", EMPLOYEES_JSON);
    write_file(dir.path(), "tasks.json", TASKS_JSON);
    let json = create_config_json(r#"{ "type": "generated" }"#, AUTO_POPULATION, "");
    let config = parse_config(json.as_str()).unwrap();

    let data = create_input_data(&config, dir.path(), &DefaultRandom::new_repeatable(0)).unwrap();

    assert_eq!(data.matrices.priority, vec![5, 10, 0]);
    assert_eq!(data.matrices.time.len(), 2);
    assert_eq!(data.matrices.satisfaction.len(), 2);
    assert!(data.matrices.time.iter().all(|row| row.len() == 3));
    assert!(data.matrices.time.iter().all(|row| row[1] >= 7));
    assert!(data.matrices.satisfaction.iter().flatten().all(|&value| value <= 10));
}

fn create_text_config_json(extra: &str) -> String {
    format!(
        r#"{{
            "generations": 2,
            "population": {{ "type": "auto", "size": 2 }},
            "operators": {{ "breed": "row-swap", "mutate": "swap", "select": "merge-truncate" }},
            "data": {{ "type": "text" }}{extra}
        }}"#
    )
}

#[test]
fn can_load_text_problem_with_its_budget() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "problem.txt", TEXT_PROBLEM);
    let config = parse_config(create_text_config_json("").as_str()).unwrap();

    let data = create_input_data(&config, dir.path(), &DefaultRandom::new_repeatable(0)).unwrap();
    let problem = create_problem(&config, &data).unwrap();

    assert_eq!(data.budget, Some(8));
    assert_eq!(data.matrices.priority, vec![5, 10, 0]);
    assert_eq!(problem.budget(), 8);
    assert_eq!((problem.employees(), problem.tasks()), (2, 3));
}

#[test]
fn can_override_text_problem_budget_from_config() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "problem.txt", TEXT_PROBLEM);
    let config = parse_config(create_text_config_json(r#", "budget": 5"#).as_str()).unwrap();

    let data = create_input_data(&config, dir.path(), &DefaultRandom::new_repeatable(0)).unwrap();

    assert_eq!(create_problem(&config, &data).unwrap().budget(), 5);
}

#[test]
fn can_fail_on_missing_budget() {
    let dir = TempDir::new().unwrap();
    write_matrices(dir.path());
    let json = create_text_config_json("").replace(r#""type": "text""#, r#""type": "matrices""#);
    let config = parse_config(json.as_str()).unwrap();

    let data = create_input_data(&config, dir.path(), &DefaultRandom::new_repeatable(0)).unwrap();
    let err = create_problem(&config, &data).err().unwrap();

    assert!(err.to_string().starts_with("missing budget"));
}

#[test]
fn can_generate_matrices_in_auto_mode() {
    let json = create_config_json(r#"{ "type": "auto", "employees": 3, "tasks": 7 }"#, AUTO_POPULATION, "");
    let config = parse_config(json.as_str()).unwrap();

    let data = create_input_data(&config, Path::new("."), &DefaultRandom::new_repeatable(0)).unwrap();
    let problem = create_problem(&config, &data).unwrap();

    assert_eq!(problem.employees(), 3);
    assert_eq!(problem.tasks(), 7);
    assert_eq!(problem.budget(), 6);
}

#[test]
fn can_fail_on_empty_auto_data() {
    let json = create_config_json(r#"{ "type": "auto", "employees": 0, "tasks": 7 }"#, AUTO_POPULATION, "");
    let config = parse_config(json.as_str()).unwrap();

    assert!(create_input_data(&config, Path::new("."), &DefaultRandom::new_repeatable(0)).is_err());
}

#[test]
fn can_fail_on_zero_budget() {
    let dir = TempDir::new().unwrap();
    write_matrices(dir.path());
    let mut config = parse_config(create_matrices_config_json().as_str()).unwrap();
    config.budget = Some(0);
    let data = create_input_data(&config, dir.path(), &DefaultRandom::new_repeatable(0)).unwrap();

    let err = create_problem(&config, &data).err().unwrap();

    assert_eq!(err.to_string(), "time budget must be a positive integer");
}

#[test]
fn can_create_legal_population_of_given_size() {
    let dir = TempDir::new().unwrap();
    write_matrices(dir.path());
    let config = parse_config(create_matrices_config_json().as_str()).unwrap();
    let random = DefaultRandom::new_repeatable(0);
    let data = create_input_data(&config, dir.path(), &random).unwrap();
    let problem = create_problem(&config, &data).unwrap();

    let population = create_population(&config, problem, dir.path(), &random).unwrap();

    assert_eq!(population.len(), 4);
    assert!(population.iter().all(|solution| solution.is_legal()));
}

#[test]
fn can_reject_too_small_population() {
    let dir = TempDir::new().unwrap();
    write_matrices(dir.path());
    let json = create_config_json(MATRICES_DATA, r#"{ "type": "auto", "size": 1 }"#, "");
    let config = parse_config(json.as_str()).unwrap();
    let random = DefaultRandom::new_repeatable(0);
    let problem = create_problem(&config, &create_input_data(&config, dir.path(), &random).unwrap()).unwrap();

    let err = create_population(&config, problem, dir.path(), &random).err().unwrap();

    assert_eq!(err.to_string(), "population size must be at least 2, got 1");
}

#[test]
fn can_load_population_from_file() {
    let dir = TempDir::new().unwrap();
    write_matrices(dir.path());
    write_file(dir.path(), "population.json", "[[[1,0,0,0,0],[0,1,0,0,0]], [[0,0,1,0,0],[0,0,0,1,1]]]");
    let json = create_config_json(MATRICES_DATA, r#"{ "type": "fromFile", "path": "population.json" }"#, "");
    let config = parse_config(json.as_str()).unwrap();
    let random = DefaultRandom::new_repeatable(0);
    let problem = create_problem(&config, &create_input_data(&config, dir.path(), &random).unwrap()).unwrap();

    let population = create_population(&config, problem, dir.path(), &random).unwrap();

    assert_eq!(population.len(), 2);
    assert_eq!(population[1].assignment().rows(), &[vec![0_u8, 0, 1, 0, 0], vec![0_u8, 0, 0, 1, 1]]);
}

#[test]
fn can_reject_population_file_with_unexpected_extension() {
    let dir = TempDir::new().unwrap();
    write_matrices(dir.path());
    let json = create_config_json(MATRICES_DATA, r#"{ "type": "fromFile", "path": "population.txt" }"#, "");
    let config = parse_config(json.as_str()).unwrap();
    let random = DefaultRandom::new_repeatable(0);
    let problem = create_problem(&config, &create_input_data(&config, dir.path(), &random).unwrap()).unwrap();

    let err = create_population(&config, problem, dir.path(), &random).err().unwrap();

    assert_eq!(err.to_string(), "population file must be a json file, got 'population.txt'");
}
