mod commit_to_rented;
