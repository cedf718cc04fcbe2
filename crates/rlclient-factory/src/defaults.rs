// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default factory set.
//!
//! Registers the built-in implementations under their well-known keys:
//!
//! | axis           | key                       | builds                              |
//! |----------------|---------------------------|-------------------------------------|
//! | model          | `VW`                      | [`VwModel`]                         |
//! | trace logger   | `NULL_TRACE_LOGGER`       | no logger (`None`)                  |
//! | trace logger   | `CONSOLE_TRACE_LOGGER`    | [`ConsoleTracer`] on stderr         |
//! | sender         | `OBSERVATION_FILE_SENDER` | [`FileSender`] on `observation.file.name` |
//! | sender         | `INTERACTION_FILE_SENDER` | [`FileSender`] on `interaction.file.name` |
//! | data transport | `FILE_MODEL_DATA`         | [`FileModelData`] on `model.file.name` |
//!
//! Platform factories (cloud transports and senders) are registered after
//! the built-ins through a [`PlatformHook`].

use std::sync::Arc;

use rlclient_config::Configuration;
use rlclient_config::constants::{default, name, value};
use rlclient_core::{ClientError, DataTransport, ErrorCallback, Model, Sender, TraceLogger};

use crate::builtin::{ConsoleTracer, FileModelData, FileSender, VwModel};
use crate::registries::FactoryRegistries;

/// Registers platform-specific factories into freshly built registries.
///
/// Invoked once per initialization, after the default factory set, so it
/// can `replace` a built-in deliberately. An error is reported as a startup
/// error; it does not undo registrations made before it.
pub type PlatformHook = fn(&mut FactoryRegistries) -> Result<(), ClientError>;

/// Register the default factory set, then run `platform` if given.
///
/// Every failed registration is returned; none of them stop the remaining
/// registrations.
pub fn register_default_factories(
    registries: &mut FactoryRegistries,
    platform: Option<PlatformHook>,
) -> Vec<ClientError> {
    let results = [
        registries.models_mut().register(value::VW, vw_model_create),
        registries
            .trace_loggers_mut()
            .register(value::NULL_TRACE_LOGGER, null_tracer_create),
        registries
            .trace_loggers_mut()
            .register(value::CONSOLE_TRACE_LOGGER, console_tracer_create),
        registries.senders_mut().register(
            value::OBSERVATION_FILE_SENDER,
            file_sender_factory(
                "observation_file",
                name::OBSERVATION_FILE_NAME,
                default::OBSERVATION_FILE_NAME,
            ),
        ),
        registries.senders_mut().register(
            value::INTERACTION_FILE_SENDER,
            file_sender_factory(
                "interaction_file",
                name::INTERACTION_FILE_NAME,
                default::INTERACTION_FILE_NAME,
            ),
        ),
        registries
            .data_transports_mut()
            .register(value::FILE_MODEL_DATA, file_model_data_create),
    ];

    let mut errors: Vec<ClientError> = results.into_iter().filter_map(Result::err).collect();

    if let Some(hook) = platform
        && let Err(e) = hook(registries)
    {
        errors.push(e);
    }

    errors
}

fn vw_model_create(
    _config: &Configuration,
    _extra: (),
    trace_logger: Option<&Arc<dyn TraceLogger>>,
) -> Result<Box<dyn Model>, ClientError> {
    Ok(Box::new(VwModel::new(trace_logger.cloned())))
}

fn null_tracer_create(
    _config: &Configuration,
    _extra: (),
    _trace_logger: Option<&Arc<dyn TraceLogger>>,
) -> Result<Option<Arc<dyn TraceLogger>>, ClientError> {
    Ok(None)
}

fn console_tracer_create(
    _config: &Configuration,
    _extra: (),
    _trace_logger: Option<&Arc<dyn TraceLogger>>,
) -> Result<Option<Arc<dyn TraceLogger>>, ClientError> {
    Ok(Some(Arc::new(ConsoleTracer::new())))
}

fn file_model_data_create(
    config: &Configuration,
    _extra: (),
    trace_logger: Option<&Arc<dyn TraceLogger>>,
) -> Result<Box<dyn DataTransport>, ClientError> {
    let file_name = config.get(name::MODEL_FILE_NAME, default::MODEL_FILE_NAME);
    Ok(Box::new(FileModelData::new(file_name, trace_logger.cloned())))
}

/// Builds a file sender factory that reads its destination from `option`.
fn file_sender_factory(
    sender_name: &'static str,
    option: &'static str,
    default_file_name: &'static str,
) -> impl Fn(
    &Configuration,
    ErrorCallback,
    Option<&Arc<dyn TraceLogger>>,
) -> Result<Box<dyn Sender>, ClientError>
+ Send
+ Sync
+ 'static {
    move |config: &Configuration,
          error_cb: ErrorCallback,
          trace_logger: Option<&Arc<dyn TraceLogger>>| {
        let file_name = config.get(option, default_file_name);
        if file_name.trim().is_empty() {
            return Err(ClientError::InvalidConfiguration {
                key: option.to_string(),
                message: "file name must not be empty".to_string(),
            });
        }
        let sender = FileSender::new(sender_name, file_name, error_cb, trace_logger.cloned())?;
        Ok(Box::new(sender) as Box<dyn Sender>)
    }
}
