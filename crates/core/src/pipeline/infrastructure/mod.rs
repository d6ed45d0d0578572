pub mod threaded_session_executor;
