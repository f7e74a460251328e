mod auth_session;
