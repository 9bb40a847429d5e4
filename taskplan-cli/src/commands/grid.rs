#[cfg(test)]
#[path = "../../tests/unit/commands/grid_test.rs"]
mod grid_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use taskplan_cli::extensions::config::*;
use taskplan_cli::extensions::grid::*;
use taskplan_cli::extensions::io::open_file;
use taskplan_core::prelude::{BreedType, DefaultRandom, MutateType, SelectType};

pub const CONFIG_ARG_NAME: &str = "CONFIG";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const BREED_ARG_NAME: &str = "breed";
pub const MUTATE_ARG_NAME: &str = "mutate";
pub const SELECT_ARG_NAME: &str = "select";
pub const GENERATIONS_ARG_NAME: &str = "generations";
pub const POPULATION_SIZES_ARG_NAME: &str = "population-sizes";
pub const LOG_ARG_NAME: &str = "log";

pub fn get_grid_app() -> Command {
    Command::new("grid")
        .about("Runs a grid search over strategies, generations and population sizes in parallel")
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Sets experiment config file, its data, budget, weights and seed are used")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the csv file for result output, stdout is used if not set")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BREED_ARG_NAME)
                .help("Comma separated breed strategies, all by default")
                .long(BREED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MUTATE_ARG_NAME)
                .help("Comma separated mutate strategies, all by default")
                .long(MUTATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SELECT_ARG_NAME)
                .help("Comma separated select strategies, all by default")
                .long(SELECT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Comma separated amounts of generations, default is 1,10,100")
                .short('g')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POPULATION_SIZES_ARG_NAME)
                .help("Comma separated initial population sizes, default is 2,20,100")
                .short('p')
                .long(POPULATION_SIZES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether the best combination is written into stdout")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_grid(matches: &ArgMatches) -> GenericResult<()> {
    let config_path = get_path(matches, CONFIG_ARG_NAME)?;
    let logger = create_logger(matches.get_flag(LOG_ARG_NAME));
    let params = get_grid_params(matches)?;

    if params.population_sizes.iter().any(|&size| size < MIN_POPULATION_SIZE) {
        return Err(format!("population size must be at least {MIN_POPULATION_SIZE}").into());
    }

    let config = read_config(open_file(config_path.as_path(), "config")?)?;
    let data_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let seed = config.seed.unwrap_or(0);

    let data = create_input_data(&config, data_dir, &DefaultRandom::new_repeatable(seed))?;
    let problem = create_problem(&config, &data)?;

    (logger)(format!("running {} combinations", params.combinations().len()).as_str());

    let results = run_grid_search(problem, &params, seed)?;

    let out_file = matches
        .get_one::<String>(OUT_RESULT_ARG_NAME)
        .map(|path| File::create(path).map_err(|err| format!("cannot create result file '{path}': '{err}'")))
        .transpose()?;
    write_grid_results(create_write_buffer(out_file), results.as_slice())?;

    if let Some(best) = find_best_result(results.as_slice()) {
        let GridCombination { breed, mutate, select, generations, population_size } = best.combination;
        (logger)(
            format!(
                "best combination: breed={breed}, mutate={mutate}, select={select}, generations={generations}, \
                 population size={population_size}, fitness: {}",
                best.best.objectives()
            )
            .as_str(),
        );
    }

    Ok(())
}

fn get_grid_params(matches: &ArgMatches) -> GenericResult<GridParams> {
    let defaults = GridParams::default();

    Ok(GridParams {
        breeds: parse_list_value::<BreedType>(matches, BREED_ARG_NAME, "breed strategies")?.unwrap_or(defaults.breeds),
        mutates: parse_list_value::<MutateType>(matches, MUTATE_ARG_NAME, "mutate strategies")?
            .unwrap_or(defaults.mutates),
        selects: parse_list_value::<SelectType>(matches, SELECT_ARG_NAME, "select strategies")?
            .unwrap_or(defaults.selects),
        generations: parse_list_value::<usize>(matches, GENERATIONS_ARG_NAME, "generations")?
            .unwrap_or(defaults.generations),
        population_sizes: parse_list_value::<usize>(matches, POPULATION_SIZES_ARG_NAME, "population sizes")?
            .unwrap_or(defaults.population_sizes),
    })
}
