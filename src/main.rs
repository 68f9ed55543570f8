use jlaunch::config::*;
use jlaunch::consts::*;
use jlaunch::host::LaunchMode;
use jlaunch::{cmds, trace};
use std::env;
use std::path::Path;

fn  main() -> Result<(), i32> {
    let args: Vec<String> = env::args().collect();
    let conf = if Path::new(CONF_FILE).exists()
    {
        match Config::load()
        {
            Ok(x) => x,
            Err(e) =>
            {
                eprintln!("{RED}[jlaunch]{RESET} cannot read {CONF_FILE}: {e}");
                return Err(1);
            }
        }
    }
    else
    {
        Config::default()
    };
    trace::register_console_tracer(&conf.log_level);

    let extra_args_start = args.iter().position(|arg| arg == "--");
    let user_args: Vec<String> = match extra_args_start
    {
        Some(pos) => args[pos + 1..].to_vec(),
        None => Vec::new(),
    };
    let target = match args.get(2)
    {
        Some(x) if x == "--" => None,
        Some(s) => Some(s),
        None => None,
    };

    let result = match args.get(1).map(String::as_str)
    {
        Some("init") => cmds::init(&conf),
        Some("locate") => cmds::locate(&conf),
        Some("consts") =>
        {
            cmds::consts();
            Ok(())
        }
        Some("run") => cmds::run(target, &user_args, &conf, conf.mode),
        Some("exec") => cmds::run(target, &user_args, &conf, LaunchMode::InProcess),
        Some("system") => cmds::run(target, &user_args, &conf, LaunchMode::OutOfProcess),
        Some("--help") =>
        {
            cmds::help();
            Ok(())
        }
        Some(cmd) =>
        {
            eprintln!("Unrecognized command: '{}'", cmd);
            return Err(1);
        }
        None =>
        {
            eprintln!("No command provided");
            return Err(1);
        }
    };
    if let Err(e) = result
    {
        eprintln!("{e}");
        return Err(1);
    }
    Ok(())
}
