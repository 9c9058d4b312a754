mod violation;
