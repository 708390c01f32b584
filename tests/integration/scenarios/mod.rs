mod live_api;
